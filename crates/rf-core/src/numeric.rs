use crate::RfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RfError::NonFinite { what, value: v })
    }
}

/// Check every element of a slice with [`ensure_finite`].
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> Result<(), RfError> {
    for &v in values {
        ensure_finite(v, what)?;
    }
    Ok(())
}

/// Fail unless `actual` matches the reference length.
pub fn ensure_same_len(expected: usize, actual: usize, what: &'static str) -> Result<(), RfError> {
    if expected == actual {
        Ok(())
    } else {
        Err(RfError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Sample spacing of a coordinate array.
///
/// Interior points use central differences `(x[i+1] - x[i-1]) / 2`, the two
/// endpoints use one-sided differences. A single point has zero spacing.
pub fn gradient(x: &[Real]) -> Vec<Real> {
    let n = x.len();
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut dx = Vec::with_capacity(n);
            dx.push(x[1] - x[0]);
            for i in 1..n - 1 {
                dx.push(0.5 * (x[i + 1] - x[i - 1]));
            }
            dx.push(x[n - 1] - x[n - 2]);
            dx
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_same_len_reports_lengths() {
        assert!(ensure_same_len(3, 3, "twist").is_ok());
        let err = ensure_same_len(3, 2, "twist").unwrap_err();
        assert_eq!(
            err,
            RfError::LengthMismatch {
                what: "twist",
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn gradient_uneven_spacing() {
        let dx = gradient(&[0.0, 1.0, 3.0, 6.0]);
        assert_eq!(dx, vec![1.0, 1.5, 2.5, 3.0]);
    }

    #[test]
    fn gradient_degenerate_lengths() {
        assert!(gradient(&[]).is_empty());
        assert_eq!(gradient(&[4.0]), vec![0.0]);
        assert_eq!(gradient(&[1.0, 3.0]), vec![2.0, 2.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn gradient_of_uniform_grid_is_constant(
            start in -100.0_f64..100.0,
            step in 0.01_f64..10.0,
            n in 2_usize..50,
        ) {
            let x: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            for dx in gradient(&x) {
                prop_assert!(nearly_equal(dx, step, tol));
            }
        }
    }
}
