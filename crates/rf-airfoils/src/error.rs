//! Airfoil polar errors.

use rf_core::RfError;
use thiserror::Error;

/// Result type for polar operations.
pub type AirfoilResult<T> = Result<T, AirfoilError>;

/// Errors raised while building polar tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirfoilError {
    /// Table has no rows.
    #[error("Polar table is empty")]
    EmptyTable,

    /// Column lengths disagree.
    #[error("Polar column {column} has {actual} rows, expected {expected}")]
    ColumnLength {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Angle of attack column decreases.
    #[error("Angles of attack must be ascending (row {row}: {alpha} after {previous})")]
    Unsorted {
        row: usize,
        previous: f64,
        alpha: f64,
    },

    /// NaN or infinite table entry.
    #[error("Non-finite value in polar column {column} at row {row}")]
    NonFinite { column: &'static str, row: usize },
}

impl From<AirfoilError> for RfError {
    fn from(err: AirfoilError) -> Self {
        match err {
            AirfoilError::ColumnLength {
                column,
                expected,
                actual,
            } => RfError::LengthMismatch {
                what: column,
                expected,
                actual,
            },
            other => RfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
