//! Form-to-prediction adapter: the applicant record, its fixed encoding, and
//! the approval decision.

mod decide;
mod encode;
mod record;

pub use decide::{APPROVED_LABEL, Outcome, decide};
pub use encode::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, encode};
pub use record::{
    APPLICANT_INCOME_RANGE, ApplicationError, COAPPLICANT_INCOME_RANGE, Choice, CreditHistory,
    DEPENDENTS_RANGE, Education, Gender, LOAN_AMOUNT_RANGE, LOAN_AMOUNT_TERM_RANGE,
    LoanApplication, PropertyArea, YesNo,
};
