use std::path::{Path, PathBuf};

use loan_approval::application::FEATURE_COUNT;

/// Logistic model that approves only applicants whose credit history is met
/// and whose applicant income is at least 3000.
pub fn credit_and_income_logreg_json() -> String {
    let mut coefficients = vec![0.0; FEATURE_COUNT];
    coefficients[5] = 0.002;
    coefficients[9] = 10.0;
    format!(
        r#"{{
  "kind": "logreg",
  "model_version": 4,
  "feature_len": {FEATURE_COUNT},
  "feature_names": ["gender", "married", "dependents", "education", "self_employed",
                    "applicant_income", "coapplicant_income", "loan_amount",
                    "loan_amount_term", "credit_history", "property_area"],
  "classes": [0, 1],
  "coefficients": {coefficients:?},
  "intercept": -16.0
}}"#
    )
}

pub fn write_artifact(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).expect("write artifact");
    path
}
