//! Rotor operating point.

use crate::error::{SolverError, SolverResult};
use rf_core::units::{AngularVelocity, Velocity, mps, rad_per_s_to_rpm, rpm, rpm_to_rad_per_s};

/// Free-stream wind speed, collective pitch and rotor speed for one solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingPoint {
    wind_speed: f64,
    pitch_deg: f64,
    rpm: f64,
}

impl OperatingPoint {
    /// # Errors
    /// Wind speed must be finite and positive, pitch finite, and rotor speed
    /// finite and non-negative.
    pub fn new(wind_speed: f64, pitch_deg: f64, rpm: f64) -> SolverResult<Self> {
        if !(wind_speed.is_finite() && wind_speed > 0.0) {
            return Err(SolverError::OperatingPoint {
                what: format!("wind speed must be positive, got {wind_speed}"),
            });
        }
        if !pitch_deg.is_finite() {
            return Err(SolverError::OperatingPoint {
                what: format!("pitch must be finite, got {pitch_deg}"),
            });
        }
        if !(rpm.is_finite() && rpm >= 0.0) {
            return Err(SolverError::OperatingPoint {
                what: format!("rotor speed must be non-negative, got {rpm}"),
            });
        }
        Ok(Self {
            wind_speed,
            pitch_deg,
            rpm,
        })
    }

    /// Operating point whose rotor speed gives tip-speed ratio `tsr` on a
    /// rotor of tip radius `radius`.
    pub fn from_tip_speed_ratio(
        wind_speed: f64,
        pitch_deg: f64,
        tsr: f64,
        radius: f64,
    ) -> SolverResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SolverError::OperatingPoint {
                what: format!("rotor radius must be positive, got {radius}"),
            });
        }
        Self::new(
            wind_speed,
            pitch_deg,
            rad_per_s_to_rpm(tsr * wind_speed / radius),
        )
    }

    /// Wind speed (m/s).
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// Collective pitch (degrees).
    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }

    /// Rotor speed (rev/min).
    pub fn rpm(&self) -> f64 {
        self.rpm
    }

    /// Rotor angular speed (rad/s).
    pub fn omega(&self) -> f64 {
        rpm_to_rad_per_s(self.rpm)
    }

    /// Tip-speed ratio `ωR / v0` on a rotor of tip radius `radius`.
    pub fn tip_speed_ratio(&self, radius: f64) -> f64 {
        self.omega() * radius / self.wind_speed
    }

    pub fn velocity(&self) -> Velocity {
        mps(self.wind_speed)
    }

    pub fn angular_velocity(&self) -> AngularVelocity {
        rpm(self.rpm)
    }
}
