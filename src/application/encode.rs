//! Fixed mapping from a loan application to the model's feature vector.

use super::record::{Education, Gender, LoanApplication, PropertyArea, YesNo};

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 11;

/// Canonical feature names, in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "gender",
    "married",
    "dependents",
    "education",
    "self_employed",
    "applicant_income",
    "coapplicant_income",
    "loan_amount",
    "loan_amount_term",
    "credit_history",
    "property_area",
];

/// Feature vector in the exact order the trained model expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_array(self) -> [f64; FEATURE_COUNT] {
        self.0
    }
}

/// Encode a loan application. Pure and total.
pub fn encode(app: &LoanApplication) -> FeatureVector {
    FeatureVector([
        flag(app.gender == Gender::Male),
        flag(app.married == YesNo::Yes),
        f64::from(app.dependents),
        flag(app.education == Education::Graduate),
        flag(app.self_employed == YesNo::Yes),
        f64::from(app.applicant_income),
        f64::from(app.coapplicant_income),
        f64::from(app.loan_amount),
        f64::from(app.loan_amount_term),
        app.credit_history.as_f64(),
        property_code(app.property_area),
    ])
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn property_code(area: PropertyArea) -> f64 {
    match area {
        PropertyArea::Urban => 2.0,
        PropertyArea::Semiurban => 1.0,
        PropertyArea::Rural => 0.0,
    }
}
