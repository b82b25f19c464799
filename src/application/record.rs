//! Loan application record and the categorical choices offered by the form.
//!
//! The form only ever produces valid choices. Text coming from anywhere else
//! goes through [`Choice::parse_label`], which rejects unknown labels with
//! [`ApplicationError::UnknownCategory`] instead of mapping them to a default.

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

/// Errors raised when a category or numeric field is outside its domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// A categorical field received a value that is not one of its choices.
    #[error("Unrecognized {field} value {value:?} (expected one of: {expected})")]
    UnknownCategory {
        field: &'static str,
        value: String,
        expected: String,
    },
    /// A bounded integer field is outside its allowed range.
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// A closed set of form choices with fixed display labels.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Field name used in error messages.
    const FIELD: &'static str;
    /// Every choice, in the order the form lists them.
    const ALL: &'static [Self];

    /// Label shown in the form and accepted by [`Choice::parse_label`].
    fn label(self) -> &'static str;

    /// Parse a label, rejecting anything that is not an exact match.
    fn parse_label(value: &str) -> Result<Self, ApplicationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.label() == value)
            .ok_or_else(|| ApplicationError::UnknownCategory {
                field: Self::FIELD,
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|choice| choice.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl Choice for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum! {
    /// Applicant gender as collected by the form.
    Gender, "gender" { Male => "Male", Female => "Female" }
}

choice_enum! {
    /// Yes/No answer used by the married and self-employed fields.
    YesNo, "yes/no" { Yes => "Yes", No => "No" }
}

choice_enum! {
    /// Highest education level.
    Education, "education" { Graduate => "Graduate", NotGraduate => "Not Graduate" }
}

choice_enum! {
    /// Whether the applicant's credit history meets guidelines.
    CreditHistory, "credit_history" { Unmet => "0.0", Met => "1.0" }
}

choice_enum! {
    /// Location class of the property.
    PropertyArea, "property_area" { Urban => "Urban", Semiurban => "Semiurban", Rural => "Rural" }
}

impl CreditHistory {
    /// Numeric flag as fed to the model.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Unmet => 0.0,
            Self::Met => 1.0,
        }
    }
}

/// Allowed range for number of dependents.
pub const DEPENDENTS_RANGE: RangeInclusive<u32> = 0..=10;
/// Allowed range for applicant income.
pub const APPLICANT_INCOME_RANGE: RangeInclusive<u32> = 0..=100_000;
/// Allowed range for coapplicant income.
pub const COAPPLICANT_INCOME_RANGE: RangeInclusive<u32> = 0..=50_000;
/// Allowed range for the loan amount, in thousands.
pub const LOAN_AMOUNT_RANGE: RangeInclusive<u32> = 0..=1_000;
/// Allowed range for the loan term.
pub const LOAN_AMOUNT_TERM_RANGE: RangeInclusive<u32> = 0..=500;

/// Snapshot of the form taken when the user asks for a prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanApplication {
    pub gender: Gender,
    pub married: YesNo,
    pub dependents: u32,
    pub education: Education,
    pub self_employed: YesNo,
    pub applicant_income: u32,
    pub coapplicant_income: u32,
    /// Requested amount in thousands.
    pub loan_amount: u32,
    pub loan_amount_term: u32,
    pub credit_history: CreditHistory,
    pub property_area: PropertyArea,
}

impl Default for LoanApplication {
    /// Initial widget values: the first option of every choice and the form's
    /// preset numbers.
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            married: YesNo::Yes,
            dependents: 0,
            education: Education::Graduate,
            self_employed: YesNo::Yes,
            applicant_income: 5_000,
            coapplicant_income: 0,
            loan_amount: 100,
            loan_amount_term: 360,
            credit_history: CreditHistory::Unmet,
            property_area: PropertyArea::Urban,
        }
    }
}

impl LoanApplication {
    /// Check every bounded integer field against its range.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        check_range("dependents", self.dependents, &DEPENDENTS_RANGE)?;
        check_range("applicant_income", self.applicant_income, &APPLICANT_INCOME_RANGE)?;
        check_range(
            "coapplicant_income",
            self.coapplicant_income,
            &COAPPLICANT_INCOME_RANGE,
        )?;
        check_range("loan_amount", self.loan_amount, &LOAN_AMOUNT_RANGE)?;
        check_range("loan_amount_term", self.loan_amount_term, &LOAN_AMOUNT_TERM_RANGE)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ApplicationError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ApplicationError::OutOfRange {
        field,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_the_same_choice() {
        for area in PropertyArea::ALL {
            assert_eq!(PropertyArea::parse_label(area.label()).unwrap(), *area);
        }
        assert_eq!(
            Education::parse_label("Not Graduate").unwrap(),
            Education::NotGraduate
        );
    }

    #[test]
    fn unknown_labels_are_rejected_instead_of_defaulting() {
        let err = Gender::parse_label("male").unwrap_err();
        assert_eq!(
            err,
            ApplicationError::UnknownCategory {
                field: "gender",
                value: "male".into(),
                expected: "Male, Female".into(),
            }
        );
        assert!(Education::parse_label("Postgraduate").is_err());
        assert!(YesNo::parse_label("Maybe").is_err());
        assert!(PropertyArea::parse_label("Suburban").is_err());
    }

    #[test]
    fn credit_history_accepts_only_exact_flags() {
        assert_eq!(CreditHistory::parse_label("0.0").unwrap().as_f64(), 0.0);
        assert_eq!(CreditHistory::parse_label("1.0").unwrap().as_f64(), 1.0);
        assert!(CreditHistory::parse_label("0.5").is_err());
        assert!(CreditHistory::parse_label("1").is_err());
    }

    #[test]
    fn defaults_match_form_presets_and_validate() {
        let app = LoanApplication::default();
        assert_eq!(app.applicant_income, 5_000);
        assert_eq!(app.loan_amount_term, 360);
        assert_eq!(app.self_employed, YesNo::Yes);
        assert_eq!(app.credit_history, CreditHistory::Unmet);
        app.validate().unwrap();
    }

    #[test]
    fn validate_reports_first_out_of_range_field() {
        let app = LoanApplication {
            dependents: 11,
            loan_amount: 5_000,
            ..LoanApplication::default()
        };
        assert_eq!(
            app.validate().unwrap_err(),
            ApplicationError::OutOfRange {
                field: "dependents",
                value: 11,
                min: 0,
                max: 10,
            }
        );
    }

    #[test]
    fn range_upper_bounds_are_inclusive() {
        let app = LoanApplication {
            dependents: 10,
            applicant_income: 100_000,
            coapplicant_income: 50_000,
            loan_amount: 1_000,
            loan_amount_term: 500,
            ..LoanApplication::default()
        };
        app.validate().unwrap();
    }
}
