//! Validated airfoil polar table.

use crate::error::{AirfoilError, AirfoilResult};
use crate::interpolate::lookup;

/// Lift and drag coefficients tabulated against angle of attack (degrees).
///
/// Construction checks the table once so that lookups inside the solver's
/// inner loop never have to.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilPolar {
    alpha: Vec<f64>,
    cl: Vec<f64>,
    cd: Vec<f64>,
}

impl AirfoilPolar {
    /// Build a polar from parallel columns.
    ///
    /// # Errors
    /// Returns an error if the table is empty, the columns differ in length,
    /// any entry is non-finite, or the angles are not ascending.
    pub fn new(alpha: Vec<f64>, cl: Vec<f64>, cd: Vec<f64>) -> AirfoilResult<Self> {
        if alpha.is_empty() {
            return Err(AirfoilError::EmptyTable);
        }
        for (column, len) in [("cl", cl.len()), ("cd", cd.len())] {
            if len != alpha.len() {
                return Err(AirfoilError::ColumnLength {
                    column,
                    expected: alpha.len(),
                    actual: len,
                });
            }
        }
        for (column, values) in [("alpha", &alpha), ("cl", &cl), ("cd", &cd)] {
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(AirfoilError::NonFinite { column, row });
            }
        }
        if let Some(row) = (1..alpha.len()).find(|&i| alpha[i] < alpha[i - 1]) {
            return Err(AirfoilError::Unsorted {
                row,
                previous: alpha[row - 1],
                alpha: alpha[row],
            });
        }

        Ok(Self { alpha, cl, cd })
    }

    /// Build a polar from `(alpha, cl, cd)` rows.
    pub fn from_rows(rows: &[[f64; 3]]) -> AirfoilResult<Self> {
        let alpha = rows.iter().map(|r| r[0]).collect();
        let cl = rows.iter().map(|r| r[1]).collect();
        let cd = rows.iter().map(|r| r[2]).collect();
        Self::new(alpha, cl, cd)
    }

    /// Lift and drag coefficients at `alpha_deg`.
    #[inline]
    pub fn coefficients(&self, alpha_deg: f64) -> (f64, f64) {
        lookup(&self.alpha, &self.cl, &self.cd, alpha_deg)
    }

    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    pub fn cl(&self) -> &[f64] {
        &self.cl
    }

    pub fn cd(&self) -> &[f64] {
        &self.cd
    }

    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_rows() {
        let polar = AirfoilPolar::from_rows(&[[-5.0, -0.2, 0.01], [5.0, 0.9, 0.012]]).unwrap();
        assert_eq!(polar.len(), 2);
        assert_eq!(polar.alpha(), &[-5.0, 5.0]);
        let (cl, cd) = polar.coefficients(0.0);
        assert!((cl - 0.35).abs() < 1e-12);
        assert!((cd - 0.011).abs() < 1e-12);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            AirfoilPolar::new(vec![], vec![], vec![]),
            Err(AirfoilError::EmptyTable)
        );
    }

    #[test]
    fn rejects_column_mismatch() {
        let err = AirfoilPolar::new(vec![0.0, 1.0], vec![0.1, 0.2], vec![0.01]).unwrap_err();
        assert_eq!(
            err,
            AirfoilError::ColumnLength {
                column: "cd",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_unsorted_angles() {
        let err =
            AirfoilPolar::new(vec![0.0, 5.0, 3.0], vec![0.0; 3], vec![0.01; 3]).unwrap_err();
        assert!(matches!(err, AirfoilError::Unsorted { row: 2, .. }));
    }

    #[test]
    fn rejects_nan() {
        let err =
            AirfoilPolar::new(vec![0.0, 1.0], vec![0.1, f64::NAN], vec![0.01, 0.01]).unwrap_err();
        assert_eq!(err, AirfoilError::NonFinite { column: "cl", row: 1 });
    }
}
