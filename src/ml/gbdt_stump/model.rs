use serde::{Deserialize, Serialize};

use super::super::sigmoid;

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Feature index used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f64,
    /// Prediction for `feature <= threshold`.
    pub left_value: f64,
    /// Prediction for `feature > threshold`.
    pub right_value: f64,
}

impl Stump {
    /// Predict the stump value for a feature vector.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let idx = self.feature_index as usize;
        let value = features.get(idx).copied().unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Gradient-boosted decision stumps over a single positive-class logit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtStumpModel {
    /// Learning rate applied to each stump prediction.
    pub learning_rate: f64,
    /// Raw logit before any boosting round.
    pub init_raw: f64,
    /// One stump per boosting round.
    pub stumps: Vec<Stump>,
}

impl GbdtStumpModel {
    /// Validate structural invariants against the expected input width.
    pub fn validate(&self, feature_len: usize) -> Result<(), String> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be > 0".to_string());
        }
        if !self.init_raw.is_finite() {
            return Err("init_raw must be finite".to_string());
        }
        for (round_idx, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= feature_len {
                return Err(format!(
                    "Round {round_idx} splits on feature {} but only {feature_len} exist",
                    stump.feature_index
                ));
            }
            if !stump.threshold.is_finite()
                || !stump.left_value.is_finite()
                || !stump.right_value.is_finite()
            {
                return Err(format!("Round {round_idx} has non-finite values"));
            }
        }
        Ok(())
    }

    /// Predict the raw logit for a feature vector.
    pub fn predict_raw(&self, features: &[f64]) -> f64 {
        self.stumps.iter().fold(self.init_raw, |raw, stump| {
            raw + self.learning_rate * stump.predict(features)
        })
    }

    /// Probability of the positive class.
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        sigmoid(self.predict_raw(features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credit_stump(left: f64, right: f64) -> Stump {
        Stump {
            feature_index: 9,
            threshold: 0.5,
            left_value: left,
            right_value: right,
        }
    }

    #[test]
    fn stump_predict_branches() {
        let stump = Stump {
            feature_index: 0,
            threshold: 0.5,
            left_value: -1.0,
            right_value: 2.0,
        };
        assert_eq!(stump.predict(&[0.0]), -1.0);
        assert_eq!(stump.predict(&[0.5]), -1.0);
        assert_eq!(stump.predict(&[0.6]), 2.0);
    }

    #[test]
    fn boosting_accumulates_scaled_rounds() {
        let model = GbdtStumpModel {
            learning_rate: 0.5,
            init_raw: -1.0,
            stumps: vec![credit_stump(-2.0, 3.0), credit_stump(-1.0, 1.0)],
        };
        let mut features = [0.0; 11];
        assert!((model.predict_raw(&features) - (-2.5)).abs() < 1e-12);
        features[9] = 1.0;
        assert!((model.predict_raw(&features) - 1.0).abs() < 1e-12);
        assert!(model.predict_proba(&features) > 0.5);
    }

    #[test]
    fn validate_rejects_out_of_range_feature_index() {
        let model = GbdtStumpModel {
            learning_rate: 0.1,
            init_raw: 0.0,
            stumps: vec![Stump {
                feature_index: 11,
                threshold: 0.0,
                left_value: 0.0,
                right_value: 0.0,
            }],
        };
        assert!(model.validate(11).is_err());
        assert!(model.validate(12).is_ok());
    }
}
