//! Gradient-boosted decision-stump binary classifier.
//!
//! Each stump votes on one feature; the scaled votes are summed into a logit
//! and squashed with a sigmoid into the positive-class probability.

mod model;

pub use model::{GbdtStumpModel, Stump};
