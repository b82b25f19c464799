//! Binary logistic regression over the loan feature vector.

use serde::{Deserialize, Serialize};

use super::sigmoid;

/// Logistic regression weights with optional per-feature standardization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRegModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub feature_mean: Option<Vec<f64>>,
    #[serde(default)]
    pub feature_std: Option<Vec<f64>>,
}

impl LogRegModel {
    /// Validate dimensions against the expected input width.
    pub fn validate(&self, feature_len: usize) -> Result<(), String> {
        if self.coefficients.len() != feature_len {
            return Err(format!(
                "coefficients length {} does not match feature_len {feature_len}",
                self.coefficients.len()
            ));
        }
        if self.coefficients.iter().any(|w| !w.is_finite()) || !self.intercept.is_finite() {
            return Err("weights must be finite".to_string());
        }
        match (&self.feature_mean, &self.feature_std) {
            (None, None) => {}
            (Some(mean), Some(std)) => {
                if mean.len() != feature_len {
                    return Err("feature_mean length mismatch".to_string());
                }
                if std.len() != feature_len {
                    return Err("feature_std length mismatch".to_string());
                }
            }
            _ => return Err("feature_mean and feature_std must be given together".to_string()),
        }
        Ok(())
    }

    /// Raw logit for a feature vector of the validated width.
    pub fn predict_raw(&self, features: &[f64]) -> f64 {
        let mut sum = self.intercept;
        for (i, (&weight, &value)) in self.coefficients.iter().zip(features).enumerate() {
            sum += weight * self.standardize(i, value);
        }
        sum
    }

    /// Probability of the positive class.
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        sigmoid(self.predict_raw(features))
    }

    fn standardize(&self, index: usize, value: f64) -> f64 {
        match (&self.feature_mean, &self.feature_std) {
            (Some(mean), Some(std)) => (value - mean[index]) / std[index].max(1e-9),
            _ => value,
        }
    }
}
