//! Annual energy production from a power curve and a wind climate.

use crate::curve::PerformanceCurve;
use crate::error::{PerformanceError, PerformanceResult};
use rf_core::units::constants::HOURS_PER_YEAR;

/// Weibull probability density `(k/A)(v/A)^(k-1) exp(-(v/A)^k)`.
///
/// Zero for non-positive wind speeds.
pub fn weibull_pdf(v: f64, scale: f64, shape: f64) -> f64 {
    if v <= 0.0 {
        return 0.0;
    }
    let x = v / scale;
    (shape / scale) * x.powf(shape - 1.0) * (-x.powf(shape)).exp()
}

/// Weibull wind-speed distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindDistribution {
    /// Scale parameter `A` (m/s)
    pub scale: f64,
    /// Shape parameter `k`
    pub shape: f64,
}

impl Default for WindDistribution {
    fn default() -> Self {
        Self {
            scale: 8.0,
            shape: 2.0,
        }
    }
}

impl WindDistribution {
    pub fn validate(&self) -> PerformanceResult<()> {
        for (name, value) in [("scale", self.scale), ("shape", self.shape)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PerformanceError::Distribution {
                    what: format!("{name} must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }

    pub fn pdf(&self, v: f64) -> f64 {
        weibull_pdf(v, self.scale, self.shape)
    }

    /// Density evaluated at each wind speed, unnormalized.
    pub fn weights(&self, wind_speed: &[f64]) -> Vec<f64> {
        wind_speed.iter().map(|&v| self.pdf(v)).collect()
    }
}

/// Annual energy and capacity factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnergyYield {
    pub aep_mwh: f64,
    pub aep_gwh: f64,
    pub capacity_factor: f64,
    pub rated_power_kw: f64,
}

/// Annual energy of `power_kw` weighted by `weights`.
///
/// Weights are normalized to sum to one, so the result is the mean power
/// over the sampled wind speeds times the hours in a year.
pub fn annual_energy(
    power_kw: &[f64],
    weights: &[f64],
    rated_power_kw: f64,
) -> PerformanceResult<EnergyYield> {
    if power_kw.is_empty() {
        return Err(PerformanceError::Energy {
            what: "power curve is empty".into(),
        });
    }
    if power_kw.len() != weights.len() {
        return Err(PerformanceError::Energy {
            what: format!(
                "{} power values but {} weights",
                power_kw.len(),
                weights.len()
            ),
        });
    }
    if weights.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
        return Err(PerformanceError::Energy {
            what: "weights must be finite and non-negative".into(),
        });
    }
    if power_kw.iter().any(|p| !p.is_finite()) {
        return Err(PerformanceError::Energy {
            what: "power values must be finite".into(),
        });
    }
    if !(rated_power_kw.is_finite() && rated_power_kw > 0.0) {
        return Err(PerformanceError::Energy {
            what: format!("rated power must be positive, got {rated_power_kw}"),
        });
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(PerformanceError::Energy {
            what: "weights sum to zero".into(),
        });
    }

    let aep_mwh = power_kw
        .iter()
        .zip(weights)
        .map(|(p, w)| p * (w / total) * HOURS_PER_YEAR)
        .sum::<f64>()
        / 1000.0;

    Ok(EnergyYield {
        aep_mwh,
        aep_gwh: aep_mwh / 1000.0,
        capacity_factor: aep_mwh / (rated_power_kw * HOURS_PER_YEAR / 1000.0),
        rated_power_kw,
    })
}

impl PerformanceCurve {
    /// Annual energy of the corrected power curve under `wind`.
    pub fn annual_energy(
        &self,
        wind: &WindDistribution,
        rated_power_kw: f64,
    ) -> PerformanceResult<EnergyYield> {
        wind.validate()?;
        annual_energy(&self.power_kw, &wind.weights(&self.wind_speed), rated_power_kw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rayleigh_density() {
        // k = 2 is the Rayleigh distribution
        let v = 8.0;
        let expected = (2.0 / 8.0) * 1.0 * (-1.0_f64).exp();
        assert!((weibull_pdf(v, 8.0, 2.0) - expected).abs() < 1e-15);
        assert_eq!(weibull_pdf(0.0, 8.0, 2.0), 0.0);
        assert_eq!(weibull_pdf(-1.0, 8.0, 2.0), 0.0);
    }

    #[test]
    fn constant_rated_output_has_unit_capacity_factor() {
        let power = [15_000.0; 5];
        let weights = [0.1, 0.3, 0.2, 0.05, 0.01];
        let yield_ = annual_energy(&power, &weights, 15_000.0).unwrap();
        assert!((yield_.capacity_factor - 1.0).abs() < 1e-12);
        assert!((yield_.aep_mwh - 15.0 * 8760.0).abs() < 1e-6);
        assert!((yield_.aep_gwh - 131.4).abs() < 1e-9);
    }

    #[test]
    fn weights_are_normalized() {
        let power = [1000.0, 3000.0];
        let a = annual_energy(&power, &[1.0, 1.0], 5000.0).unwrap();
        let b = annual_energy(&power, &[7.0, 7.0], 5000.0).unwrap();
        assert!((a.aep_mwh - b.aep_mwh).abs() < 1e-9);
        assert!((a.aep_mwh - 2000.0 * 8.76).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(annual_energy(&[], &[], 100.0).is_err());
        assert!(annual_energy(&[1.0, 2.0], &[1.0], 100.0).is_err());
        assert!(annual_energy(&[1.0], &[0.0], 100.0).is_err());
        assert!(annual_energy(&[1.0], &[-1.0], 100.0).is_err());
        assert!(annual_energy(&[1.0], &[1.0], 0.0).is_err());
    }

    #[test]
    fn distribution_validation() {
        assert!(WindDistribution::default().validate().is_ok());
        let bad = WindDistribution {
            scale: 0.0,
            shape: 2.0,
        };
        assert!(matches!(
            bad.validate(),
            Err(PerformanceError::Distribution { .. })
        ));
    }
}
