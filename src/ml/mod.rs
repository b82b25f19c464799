//! Binary classifier loading and inference.
//!
//! A classifier artifact is a JSON file tagged with its estimator `kind`. It is
//! loaded and validated once at startup and then only read.

use std::path::PathBuf;

use thiserror::Error;

mod artifact;
pub mod gbdt_stump;
pub mod logreg;

pub use artifact::{Classifier, Estimator, ModelArtifact};

/// Anything that maps a feature vector to a class label.
pub trait Predictor {
    /// Predict the class label for one feature vector.
    fn predict(&self, features: &[f64]) -> Result<i64, ModelError>;

    /// Probability of the positive label, for models that expose one.
    fn positive_probability(&self, features: &[f64]) -> Result<Option<f64>, ModelError> {
        let _ = features;
        Ok(None)
    }
}

/// Errors raised while loading or running a classifier.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file could not be read.
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not valid JSON for a known estimator.
    #[error("Invalid model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact parsed but does not fit the loan feature vector.
    #[error("Incompatible model artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    /// A feature vector of the wrong width was passed to `predict`.
    #[error("Expected {expected} features, got {actual}")]
    FeatureLength { expected: usize, actual: usize },
    /// The model produced a NaN probability.
    #[error("Model produced a non-finite probability")]
    NonFinite,
}

/// Numerically stable logistic function.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_symmetric_and_saturates_without_nan() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
        assert_eq!(sigmoid(1e6), 1.0);
        assert_eq!(sigmoid(-1e6), 0.0);
    }
}
