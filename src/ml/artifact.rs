//! On-disk classifier artifact and the loaded classifier built from it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::gbdt_stump::GbdtStumpModel;
use super::logreg::LogRegModel;
use super::{ModelError, Predictor};
use crate::application::{FEATURE_COUNT, FEATURE_NAMES};

/// Serialized binary classifier, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_version: i64,
    /// Number of `f64` values per feature vector.
    pub feature_len: usize,
    /// Feature order the model was trained on, if recorded.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    /// Labels returned for `[negative, positive]`.
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
    /// Positive-class probability strictly above which the positive label wins.
    /// A tie goes to the negative label.
    #[serde(default = "default_decision_threshold", alias = "threshold")]
    pub decision_threshold: f64,
    #[serde(flatten)]
    pub estimator: Estimator,
}

/// Estimator family, selected by the artifact's `kind` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Logreg(LogRegModel),
    GbdtStump(GbdtStumpModel),
}

impl Estimator {
    /// Stable name used in logs and the about panel.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Logreg(_) => "logreg",
            Self::GbdtStump(_) => "gbdt_stump",
        }
    }
}

fn default_classes() -> [i64; 2] {
    [0, 1]
}

fn default_decision_threshold() -> f64 {
    0.5
}

impl ModelArtifact {
    /// Validate that the artifact fits the loan feature vector.
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_len != FEATURE_COUNT {
            return Err(format!(
                "Unsupported feature_len {} (expected {FEATURE_COUNT})",
                self.feature_len
            ));
        }
        if let Some(names) = &self.feature_names {
            let expected = FEATURE_NAMES.iter().copied();
            if names.len() != FEATURE_COUNT || !names.iter().map(String::as_str).eq(expected) {
                return Err(format!(
                    "feature_names {names:?} do not match expected order {FEATURE_NAMES:?}"
                ));
            }
        }
        if self.classes[0] == self.classes[1] {
            return Err("classes must hold two distinct labels".to_string());
        }
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err("decision_threshold must be within 0..=1".to_string());
        }
        match &self.estimator {
            Estimator::Logreg(model) => model.validate(self.feature_len),
            Estimator::GbdtStump(model) => model.validate(self.feature_len),
        }
    }
}

/// A validated classifier held for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Classifier {
    artifact: ModelArtifact,
    source: PathBuf,
}

impl Classifier {
    /// Load and validate an artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_artifact(artifact, path.to_path_buf())
    }

    /// Wrap an in-memory artifact after validating it.
    pub fn from_artifact(artifact: ModelArtifact, source: PathBuf) -> Result<Self, ModelError> {
        artifact
            .validate()
            .map_err(|reason| ModelError::Invalid {
                path: source.clone(),
                reason,
            })?;
        Ok(Self { artifact, source })
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Path the artifact was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Probability of the positive class.
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.artifact.feature_len {
            return Err(ModelError::FeatureLength {
                expected: self.artifact.feature_len,
                actual: features.len(),
            });
        }
        let proba = match &self.artifact.estimator {
            Estimator::Logreg(model) => model.predict_proba(features),
            Estimator::GbdtStump(model) => model.predict_proba(features),
        };
        if proba.is_nan() {
            return Err(ModelError::NonFinite);
        }
        Ok(proba)
    }
}

impl Predictor for Classifier {
    fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        let [negative, positive] = self.artifact.classes;
        let proba = self.predict_proba(features)?;
        Ok(if proba > self.artifact.decision_threshold {
            positive
        } else {
            negative
        })
    }

    fn positive_probability(&self, features: &[f64]) -> Result<Option<f64>, ModelError> {
        self.predict_proba(features).map(Some)
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} ({})",
            self.artifact.estimator.kind(),
            self.artifact.model_version,
            self.source.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{LoanApplication, Outcome, decide, encode};
    use crate::ml::gbdt_stump::Stump;
    use tempfile::tempdir;

    fn credit_only_logreg() -> ModelArtifact {
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[9] = 4.0;
        ModelArtifact {
            model_version: 3,
            feature_len: FEATURE_COUNT,
            feature_names: None,
            classes: [0, 1],
            decision_threshold: 0.5,
            estimator: Estimator::Logreg(LogRegModel {
                coefficients,
                intercept: -2.0,
                feature_mean: None,
                feature_std: None,
            }),
        }
    }

    #[test]
    fn parses_tagged_logreg_json_with_defaults() {
        let json = format!(
            r#"{{"kind":"logreg","model_version":1,"feature_len":11,
                "coefficients":{:?},"intercept":0.25}}"#,
            vec![0.0; FEATURE_COUNT]
        );
        let artifact: ModelArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(artifact.classes, [0, 1]);
        assert_eq!(artifact.decision_threshold, 0.5);
        assert_eq!(artifact.estimator.kind(), "logreg");
        artifact.validate().unwrap();
    }

    #[test]
    fn parses_tagged_gbdt_json() {
        let json = r#"{"kind":"gbdt_stump","model_version":2,"feature_len":11,
            "learning_rate":1.0,"init_raw":-1.0,
            "stumps":[{"feature_index":9,"threshold":0.5,"left_value":-1.0,"right_value":3.0}]}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        let classifier = Classifier::from_artifact(artifact, PathBuf::from("mem")).unwrap();
        let mut features = [0.0; FEATURE_COUNT];
        assert_eq!(classifier.predict(&features).unwrap(), 0);
        features[9] = 1.0;
        assert_eq!(classifier.predict(&features).unwrap(), 1);
    }

    #[test]
    fn unknown_kind_fails_to_parse() {
        let json = r#"{"kind":"random_forest","model_version":1,"feature_len":11}"#;
        assert!(serde_json::from_str::<ModelArtifact>(json).is_err());
    }

    #[test]
    fn rejects_wrong_width_and_reordered_names() {
        let mut artifact = credit_only_logreg();
        artifact.feature_len = 10;
        assert!(artifact.validate().is_err());

        let mut artifact = credit_only_logreg();
        let mut names: Vec<String> = FEATURE_NAMES.iter().map(|n| n.to_string()).collect();
        names.swap(0, 1);
        artifact.feature_names = Some(names);
        assert!(artifact.validate().is_err());

        let mut artifact = credit_only_logreg();
        artifact.feature_names = Some(FEATURE_NAMES.iter().map(|n| n.to_string()).collect());
        artifact.validate().unwrap();
    }

    #[test]
    fn rejects_duplicate_classes_and_bad_threshold() {
        let mut artifact = credit_only_logreg();
        artifact.classes = [1, 1];
        assert!(artifact.validate().is_err());

        let mut artifact = credit_only_logreg();
        artifact.decision_threshold = 1.5;
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn predict_maps_threshold_to_configured_labels() {
        let mut artifact = credit_only_logreg();
        artifact.classes = [-1, 7];
        let classifier = Classifier::from_artifact(artifact, PathBuf::from("mem")).unwrap();
        let mut features = [0.0; FEATURE_COUNT];
        assert_eq!(classifier.predict(&features).unwrap(), -1);
        features[9] = 1.0;
        assert_eq!(classifier.predict(&features).unwrap(), 7);
    }

    #[test]
    fn even_odds_fall_to_the_negative_label() {
        let mut artifact = credit_only_logreg();
        artifact.estimator = Estimator::Logreg(LogRegModel {
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 0.0,
            feature_mean: None,
            feature_std: None,
        });
        let classifier = Classifier::from_artifact(artifact, PathBuf::from("mem")).unwrap();
        let features = [1.0; FEATURE_COUNT];
        assert_eq!(classifier.predict_proba(&features).unwrap(), 0.5);
        assert_eq!(classifier.predict(&features).unwrap(), 0);
        let encoded = encode(&LoanApplication::default());
        assert_eq!(decide(&classifier, &encoded).unwrap(), Outcome::NotApproved);
    }

    #[test]
    fn short_threshold_key_moves_the_decision_boundary() {
        let json = format!(
            r#"{{"kind":"logreg","model_version":1,"feature_len":11,
                "threshold":0.99,"coefficients":{:?},"intercept":1.0}}"#,
            vec![0.0; FEATURE_COUNT]
        );
        let artifact: ModelArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(artifact.decision_threshold, 0.99);
        let classifier = Classifier::from_artifact(artifact, PathBuf::from("mem")).unwrap();
        let features = [0.0; FEATURE_COUNT];
        assert!(classifier.predict_proba(&features).unwrap() > 0.7);
        assert_eq!(classifier.predict(&features).unwrap(), 0);
    }

    #[test]
    fn predict_rejects_wrong_vector_length() {
        let classifier =
            Classifier::from_artifact(credit_only_logreg(), PathBuf::from("mem")).unwrap();
        let err = classifier.predict(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::FeatureLength {
                expected: FEATURE_COUNT,
                actual: 2
            }
        ));
    }

    #[test]
    fn load_reports_missing_and_corrupt_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            Classifier::load(&missing),
            Err(ModelError::Read { .. })
        ));

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, b"\x80\x04pickle").unwrap();
        assert!(matches!(
            Classifier::load(&corrupt),
            Err(ModelError::Parse { .. })
        ));
    }

    #[test]
    fn load_round_trips_a_written_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let artifact = ModelArtifact {
            estimator: Estimator::GbdtStump(GbdtStumpModel {
                learning_rate: 0.1,
                init_raw: 0.0,
                stumps: vec![Stump {
                    feature_index: 5,
                    threshold: 3000.0,
                    left_value: -1.0,
                    right_value: 1.0,
                }],
            }),
            ..credit_only_logreg()
        };
        std::fs::write(&path, serde_json::to_vec_pretty(&artifact).unwrap()).unwrap();
        let classifier = Classifier::load(&path).unwrap();
        assert_eq!(classifier.source(), path.as_path());
        assert_eq!(classifier.artifact().estimator.kind(), "gbdt_stump");
        assert!(classifier.to_string().starts_with("gbdt_stump v3"));
    }
}
