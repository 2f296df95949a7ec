use thiserror::Error;

pub type RfResult<T> = Result<T, RfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
