//! Error types for solver operations.

use rf_core::error::RfError;
use thiserror::Error;

/// Errors that can occur while setting up or running a blade-element solve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid blade geometry: {what}")]
    Geometry { what: String },

    #[error("Invalid operating point: {what}")]
    OperatingPoint { what: String },

    #[error("Invalid solver configuration: {what}")]
    Config { what: String },

    #[error(
        "Induction did not converge at station {station} (r = {r} m) within {iterations} iterations"
    )]
    ConvergenceFailed {
        station: usize,
        r: f64,
        iterations: usize,
    },

    #[error("Numeric error: {0}")]
    Core(#[from] RfError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for RfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Core(inner) => inner,
            SolverError::ConvergenceFailed { .. } => RfError::Invariant {
                what: e.to_string(),
            },
            other => RfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convergence_error_names_station() {
        let err = SolverError::ConvergenceFailed {
            station: 12,
            r: 48.5,
            iterations: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("station 12"));
        assert!(msg.contains("100 iterations"));
    }

    #[test]
    fn error_conversion() {
        let err = SolverError::Geometry {
            what: "empty".into(),
        };
        assert!(matches!(RfError::from(err), RfError::InvalidArg { .. }));

        let inner = RfError::NonFinite {
            what: "chord",
            value: f64::NAN,
        };
        let err: SolverError = inner.into();
        assert!(matches!(
            RfError::from(err),
            RfError::NonFinite { what: "chord", .. }
        ));
    }
}
