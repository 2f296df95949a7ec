//! Operational schedule: wind speed to pitch and rotor speed.

use crate::error::{PerformanceError, PerformanceResult};
use rf_solver::OperatingPoint;

/// Parallel wind speed, pitch and rotor speed sequences, with optional
/// measured or published reference power (kW) and thrust (kN).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationalSchedule {
    wind_speed: Vec<f64>,
    pitch_deg: Vec<f64>,
    rpm: Vec<f64>,
    reference_power_kw: Option<Vec<f64>>,
    reference_thrust_kn: Option<Vec<f64>>,
}

impl OperationalSchedule {
    /// # Errors
    /// The sequences must be non-empty, of equal length and finite; wind
    /// speeds must be positive and rotor speeds non-negative.
    pub fn new(wind_speed: Vec<f64>, pitch_deg: Vec<f64>, rpm: Vec<f64>) -> PerformanceResult<Self> {
        if wind_speed.is_empty() {
            return Err(PerformanceError::Schedule {
                what: "schedule has no entries".into(),
            });
        }
        for (name, len) in [("pitch", pitch_deg.len()), ("rpm", rpm.len())] {
            if len != wind_speed.len() {
                return Err(PerformanceError::Schedule {
                    what: format!(
                        "{name} has {len} entries, wind speed has {}",
                        wind_speed.len()
                    ),
                });
            }
        }
        for i in 0..wind_speed.len() {
            let (v, p, n) = (wind_speed[i], pitch_deg[i], rpm[i]);
            if !(v.is_finite() && p.is_finite() && n.is_finite()) {
                return Err(PerformanceError::Schedule {
                    what: format!("entry {i} is not finite"),
                });
            }
            if v <= 0.0 {
                return Err(PerformanceError::Schedule {
                    what: format!("entry {i} has non-positive wind speed {v}"),
                });
            }
            if n < 0.0 {
                return Err(PerformanceError::Schedule {
                    what: format!("entry {i} has negative rotor speed {n}"),
                });
            }
        }
        Ok(Self {
            wind_speed,
            pitch_deg,
            rpm,
            reference_power_kw: None,
            reference_thrust_kn: None,
        })
    }

    /// Attach reference power values (kW), one per entry.
    pub fn with_reference_power(mut self, power_kw: Vec<f64>) -> PerformanceResult<Self> {
        self.check_reference("reference power", &power_kw)?;
        self.reference_power_kw = Some(power_kw);
        Ok(self)
    }

    /// Attach reference thrust values (kN), one per entry.
    pub fn with_reference_thrust(mut self, thrust_kn: Vec<f64>) -> PerformanceResult<Self> {
        self.check_reference("reference thrust", &thrust_kn)?;
        self.reference_thrust_kn = Some(thrust_kn);
        Ok(self)
    }

    fn check_reference(&self, name: &str, values: &[f64]) -> PerformanceResult<()> {
        if values.len() != self.len() {
            return Err(PerformanceError::Schedule {
                what: format!(
                    "{name} has {} entries, schedule has {}",
                    values.len(),
                    self.len()
                ),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PerformanceError::Schedule {
                what: format!("{name} contains non-finite values"),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.wind_speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wind_speed.is_empty()
    }

    pub fn wind_speed(&self) -> &[f64] {
        &self.wind_speed
    }

    pub fn pitch_deg(&self) -> &[f64] {
        &self.pitch_deg
    }

    pub fn rpm(&self) -> &[f64] {
        &self.rpm
    }

    pub fn reference_power_kw(&self) -> Option<&[f64]> {
        self.reference_power_kw.as_deref()
    }

    pub fn reference_thrust_kn(&self) -> Option<&[f64]> {
        self.reference_thrust_kn.as_deref()
    }

    /// Operating point of entry `i`.
    pub fn operating_point(&self, i: usize) -> PerformanceResult<OperatingPoint> {
        if i >= self.len() {
            return Err(PerformanceError::Schedule {
                what: format!("entry {i} out of range for {} entries", self.len()),
            });
        }
        Ok(OperatingPoint::new(
            self.wind_speed[i],
            self.pitch_deg[i],
            self.rpm[i],
        )?)
    }
}
