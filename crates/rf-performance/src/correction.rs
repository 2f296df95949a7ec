//! Post-hoc corrections applied to a computed power/thrust curve.
//!
//! The momentum solver knows nothing about the generator or the pitch
//! controller, so above rated wind speed its raw power keeps growing. A
//! [`CurveCorrection`] reshapes the raw curve after all entries are solved.

use crate::schedule::OperationalSchedule;

/// A correction applied in place to curve columns ordered like `schedule`.
pub trait CurveCorrection: Send + Sync {
    fn name(&self) -> &'static str;

    /// Adjust `power_kw` and `thrust_kn` in place.
    ///
    /// Returns the rated wind speed the correction worked from, if any.
    fn apply(
        &self,
        schedule: &OperationalSchedule,
        power_kw: &mut [f64],
        thrust_kn: &mut [f64],
    ) -> Option<f64>;
}

/// Leaves the raw curve untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCorrection;

impl CurveCorrection for NoCorrection {
    fn name(&self) -> &'static str {
        "none"
    }

    fn apply(&self, _: &OperationalSchedule, _: &mut [f64], _: &mut [f64]) -> Option<f64> {
        None
    }
}

/// Rated-region limiter.
///
/// The rated wind speed is taken as the first schedule entry whose pitch
/// rises more than `pitch_jump_deg` over its predecessor. Above it power is
/// clamped at `rated_power_kw`; more than `derate_margin` m/s above it thrust
/// is scaled by `derate_factor · v_rated / v0`.
#[derive(Clone, Debug, PartialEq)]
pub struct RatedLimiter {
    /// Generator rated power (kW)
    pub rated_power_kw: f64,
    /// Used when the schedule shows no pitch step (m/s)
    pub default_rated_wind_speed: f64,
    /// Pitch increase between entries that marks the rated point (deg)
    pub pitch_jump_deg: f64,
    /// Distance above rated before thrust is scaled (m/s)
    pub derate_margin: f64,
    pub derate_factor: f64,
}

impl Default for RatedLimiter {
    fn default() -> Self {
        Self {
            rated_power_kw: 15_000.0,
            default_rated_wind_speed: 10.0,
            pitch_jump_deg: 1.0,
            derate_margin: 2.0,
            derate_factor: 0.85,
        }
    }
}

impl RatedLimiter {
    /// Rated wind speed implied by the pitch schedule.
    pub fn infer_rated_wind_speed(&self, wind_speed: &[f64], pitch_deg: &[f64]) -> f64 {
        (1..wind_speed.len().min(pitch_deg.len()))
            .find(|&i| pitch_deg[i] > pitch_deg[i - 1] + self.pitch_jump_deg)
            .map_or(self.default_rated_wind_speed, |i| wind_speed[i])
    }
}

impl CurveCorrection for RatedLimiter {
    fn name(&self) -> &'static str {
        "rated-limiter"
    }

    fn apply(
        &self,
        schedule: &OperationalSchedule,
        power_kw: &mut [f64],
        thrust_kn: &mut [f64],
    ) -> Option<f64> {
        let rated = self.infer_rated_wind_speed(schedule.wind_speed(), schedule.pitch_deg());
        for (i, &v) in schedule.wind_speed().iter().enumerate() {
            if v > rated {
                if let Some(p) = power_kw.get_mut(i) {
                    *p = p.min(self.rated_power_kw);
                }
            }
            if v > rated + self.derate_margin {
                if let Some(t) = thrust_kn.get_mut(i) {
                    *t *= self.derate_factor * rated / v;
                }
            }
        }
        Some(rated)
    }
}
