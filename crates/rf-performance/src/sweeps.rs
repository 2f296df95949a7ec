//! Sweep axis definitions for pitch and tip-speed-ratio grids.

use crate::error::{PerformanceError, PerformanceResult};

/// One axis of a parametric sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepDefinition {
    /// `points` evenly spaced values from `start` to `end`, both included.
    Linear { start: f64, end: f64, points: usize },
    /// Explicit values, used as given.
    Values(Vec<f64>),
}

impl SweepDefinition {
    pub fn linear(start: f64, end: f64, points: usize) -> Self {
        Self::Linear { start, end, points }
    }

    /// Collective pitch axis of the default coefficient surface (deg).
    pub fn default_pitch() -> Self {
        Self::linear(0.0, 20.0, 21)
    }

    /// Tip-speed-ratio axis of the default coefficient surface.
    pub fn default_tip_speed_ratio() -> Self {
        Self::linear(4.0, 12.0, 17)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Linear { points, .. } => *points,
            Self::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> PerformanceResult<()> {
        if self.is_empty() {
            return Err(PerformanceError::Sweep {
                what: "sweep has no points".into(),
            });
        }
        let finite = match self {
            Self::Linear { start, end, .. } => start.is_finite() && end.is_finite(),
            Self::Values(values) => values.iter().all(|v| v.is_finite()),
        };
        if !finite {
            return Err(PerformanceError::Sweep {
                what: "sweep contains non-finite values".into(),
            });
        }
        Ok(())
    }

    /// Generate the sweep values.
    pub fn points(&self) -> PerformanceResult<Vec<f64>> {
        self.validate()?;
        Ok(match self {
            Self::Linear { start, end, points } => linspace(*start, *end, *points),
            Self::Values(values) => values.clone(),
        })
    }
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![start; n];
    }
    let delta = (end - start) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * delta).collect();

    // Ensure exact endpoint
    points[n - 1] = end;
    points
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linear_is_monotone_between_bounds(
            start in -50.0_f64..50.0,
            span in 0.0_f64..100.0,
            n in 2_usize..200,
        ) {
            let end = start + span;
            let pts = SweepDefinition::linear(start, end, n).points().unwrap();
            prop_assert_eq!(pts.len(), n);
            prop_assert_eq!(pts[0], start);
            prop_assert_eq!(pts[n - 1], end);
            for w in pts.windows(2) {
                prop_assert!(w[1] >= w[0] - 1e-12);
            }
        }
    }
}
