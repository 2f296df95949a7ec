//! Piecewise-linear coefficient lookup.
//!
//! Between tabulated angles the coefficients are interpolated linearly.
//! Outside the table the boundary row is held constant, so extreme angles of
//! attack never extrapolate a lift slope.

/// Interpolate `(cl, cd)` at `query` degrees from raw polar columns.
///
/// Columns must have equal, non-zero length and `alpha` must be ascending.
/// Returns `None` when the columns are empty or of different lengths.
pub fn interpolate_coefficients(
    alpha: &[f64],
    cl: &[f64],
    cd: &[f64],
    query: f64,
) -> Option<(f64, f64)> {
    if alpha.is_empty() || alpha.len() != cl.len() || alpha.len() != cd.len() {
        return None;
    }
    Some(lookup(alpha, cl, cd, query))
}

/// Lookup on columns already known to be non-empty, equal length and sorted.
pub(crate) fn lookup(alpha: &[f64], cl: &[f64], cd: &[f64], query: f64) -> (f64, f64) {
    let n = alpha.len();
    let last = n - 1;

    if query.is_nan() || query < alpha[0] {
        return (cl[0], cd[0]);
    }
    if query >= alpha[last] {
        return (cl[last], cd[last]);
    }

    // alpha[lo] <= query < alpha[hi]
    let hi = alpha.partition_point(|&a| a <= query);
    let lo = hi - 1;

    let t = (query - alpha[lo]) / (alpha[hi] - alpha[lo]);
    (
        cl[lo] + t * (cl[hi] - cl[lo]),
        cd[lo] + t * (cd[hi] - cd[lo]),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn result_bounded_by_table(query in -200.0_f64..200.0) {
            let alpha = [-20.0, -5.0, 0.0, 8.0, 16.0, 30.0];
            let cl = [-0.6, -0.2, 0.3, 1.1, 1.4, 0.8];
            let cd = [0.12, 0.02, 0.008, 0.012, 0.05, 0.4];

            let (cl_q, cd_q) = interpolate_coefficients(&alpha, &cl, &cd, query).unwrap();
            let cl_min = cl.iter().cloned().fold(f64::INFINITY, f64::min);
            let cl_max = cl.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let cd_min = cd.iter().cloned().fold(f64::INFINITY, f64::min);
            let cd_max = cd.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(cl_q >= cl_min - 1e-12 && cl_q <= cl_max + 1e-12);
            prop_assert!(cd_q >= cd_min - 1e-12 && cd_q <= cd_max + 1e-12);
        }
    }
}
