use chrono::NaiveDate;
use thiserror::Error;

/// Submit-time validation failures.
///
/// The reconciliation engine itself never fails: malformed numeric input
/// degrades to 0 so typing is never blocked. Validation happens only here,
/// when the form is submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("invalid invoice date: '{raw}'")]
    InvalidDate { raw: String },
    #[error("invoice date cannot be in the future ({date})")]
    FutureDate { date: NaiveDate },
    #[error("invoice amount must be greater than zero")]
    NonPositiveAmount,
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}
