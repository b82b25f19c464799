//! Turns a model label into the outcome shown to the applicant.

use std::fmt;

use super::encode::FeatureVector;
use crate::ml::{ModelError, Predictor};

/// Label the model uses for an approved loan.
pub const APPROVED_LABEL: i64 = 1;

/// Binary decision surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Approved,
    NotApproved,
}

impl Outcome {
    /// Map a raw model label; only [`APPROVED_LABEL`] approves.
    pub fn from_label(label: i64) -> Self {
        if label == APPROVED_LABEL {
            Self::Approved
        } else {
            Self::NotApproved
        }
    }

    /// Banner text for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::Approved => "Congratulations! Your Loan is Approved.",
            Self::NotApproved => "Sorry, your Loan is not Approved.",
        }
    }

    pub fn is_approved(self) -> bool {
        self == Self::Approved
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run the model on an encoded application and map its label to an outcome.
pub fn decide<P: Predictor + ?Sized>(
    model: &P,
    features: &FeatureVector,
) -> Result<Outcome, ModelError> {
    let label = model.predict(features.as_slice())?;
    Ok(Outcome::from_label(label))
}
