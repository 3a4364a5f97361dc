use thiserror::Error;

/// Why a submitted agreement was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgreementError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("invalid date_signed {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
}
