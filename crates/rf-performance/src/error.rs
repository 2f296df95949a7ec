//! Error types for sweep and post-processing operations.

use rf_core::error::RfError;
use rf_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerformanceError {
    #[error("Invalid operational schedule: {what}")]
    Schedule { what: String },

    #[error("Invalid sweep: {what}")]
    Sweep { what: String },

    #[error("Invalid wind distribution: {what}")]
    Distribution { what: String },

    #[error("Invalid energy estimate input: {what}")]
    Energy { what: String },

    #[error("Solve failed at {context}: {source}")]
    Solve {
        context: String,
        #[source]
        source: SolverError,
    },

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Numeric error: {0}")]
    Core(#[from] RfError),
}

pub type PerformanceResult<T> = Result<T, PerformanceError>;

impl PerformanceError {
    pub(crate) fn solve(context: impl Into<String>, source: SolverError) -> Self {
        Self::Solve {
            context: context.into(),
            source,
        }
    }
}

impl From<PerformanceError> for RfError {
    fn from(e: PerformanceError) -> Self {
        match e {
            PerformanceError::Core(inner) => inner,
            PerformanceError::Solver(inner) | PerformanceError::Solve { source: inner, .. } => {
                inner.into()
            }
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
    fn solve_error_carries_context() {
        let err = PerformanceError::solve(
            "wind speed 12 m/s",
            SolverError::ConvergenceFailed {
                station: 4,
                r: 20.0,
                iterations: 100,
            },
        );
        let msg = err.to_string();
        assert!(msg.contains("wind speed 12 m/s"));
        assert!(msg.contains("station 4"));
        assert!(matches!(RfError::from(err), RfError::Invariant { .. }));
    }

    #[test]
    fn schedule_error_maps_to_invalid_arg() {
        let err = PerformanceError::Schedule {
            what: "empty".into(),
        };
        assert!(matches!(RfError::from(err), RfError::InvalidArg { .. }));
    }
}
