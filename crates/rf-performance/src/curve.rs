//! Power, thrust and torque curves over an operational schedule.

use crate::correction::CurveCorrection;
use crate::error::{PerformanceError, PerformanceResult};
use crate::execution::Execution;
use crate::schedule::OperationalSchedule;
use rf_airfoils::PolarDatabase;
use rf_core::timing::Timer;
use rf_solver::{BemConfig, BladeGeometry, solve};
use tracing::{debug, info, warn};

/// Rotor performance per schedule entry, in schedule order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerformanceCurve {
    /// Wind speed (m/s)
    pub wind_speed: Vec<f64>,
    pub pitch_deg: Vec<f64>,
    pub rpm: Vec<f64>,
    /// Corrected power (kW)
    pub power_kw: Vec<f64>,
    /// Corrected thrust (kN)
    pub thrust_kn: Vec<f64>,
    /// Aerodynamic torque (N·m)
    pub torque_nm: Vec<f64>,
    /// Power before correction (kW)
    pub raw_power_kw: Vec<f64>,
    /// Thrust before correction (kN)
    pub raw_thrust_kn: Vec<f64>,
    pub rated_wind_speed: Option<f64>,
    /// Whether every station of the entry converged
    pub converged: Vec<bool>,
    pub reference_power_kw: Option<Vec<f64>>,
    pub reference_thrust_kn: Option<Vec<f64>>,
}

impl PerformanceCurve {
    pub fn len(&self) -> usize {
        self.wind_speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wind_speed.is_empty()
    }

    pub fn unconverged_count(&self) -> usize {
        self.converged.iter().filter(|c| !**c).count()
    }

    /// Largest corrected power (kW).
    pub fn max_power_kw(&self) -> f64 {
        self.power_kw.iter().copied().fold(0.0, f64::max)
    }
}

/// Solve every schedule entry and apply `correction` to the result.
///
/// # Errors
/// Fails on the first entry whose solve fails; with the default
/// [`rf_solver::ConvergencePolicy::Accept`] that only happens for an invalid
/// configuration.
pub fn compute_performance_curve(
    blade: &BladeGeometry,
    schedule: &OperationalSchedule,
    polars: &PolarDatabase,
    config: &BemConfig,
    correction: &dyn CurveCorrection,
    execution: Execution,
) -> PerformanceResult<PerformanceCurve> {
    let timer = Timer::start();
    info!(
        entries = schedule.len(),
        correction = correction.name(),
        ?execution,
        "computing performance curve"
    );

    let indices: Vec<usize> = (0..schedule.len()).collect();
    let solutions = execution.try_map(&indices, |&i| -> PerformanceResult<_> {
        let context = || format!("wind speed {} m/s", schedule.wind_speed()[i]);
        let op = schedule.operating_point(i)?;
        solve(blade, &op, polars, config).map_err(|e| PerformanceError::solve(context(), e))
    })?;

    let raw_power_kw: Vec<f64> = solutions.iter().map(|s| s.power_w / 1000.0).collect();
    let raw_thrust_kn: Vec<f64> = solutions.iter().map(|s| s.thrust_n / 1000.0).collect();
    let torque_nm = solutions.iter().map(|s| s.torque_nm).collect();
    let converged: Vec<bool> = solutions.iter().map(|s| s.converged()).collect();

    let mut power_kw = raw_power_kw.clone();
    let mut thrust_kn = raw_thrust_kn.clone();
    let rated_wind_speed = correction.apply(schedule, &mut power_kw, &mut thrust_kn);
    if let Some(rated) = rated_wind_speed {
        debug!(rated_wind_speed = rated, "curve correction applied");
    }

    let curve = PerformanceCurve {
        wind_speed: schedule.wind_speed().to_vec(),
        pitch_deg: schedule.pitch_deg().to_vec(),
        rpm: schedule.rpm().to_vec(),
        power_kw,
        thrust_kn,
        torque_nm,
        raw_power_kw,
        raw_thrust_kn,
        rated_wind_speed,
        converged,
        reference_power_kw: schedule.reference_power_kw().map(<[f64]>::to_vec),
        reference_thrust_kn: schedule.reference_thrust_kn().map(<[f64]>::to_vec),
    };

    let unconverged = curve.unconverged_count();
    if unconverged > 0 {
        warn!(
            unconverged,
            entries = curve.len(),
            "performance curve contains entries with unconverged stations"
        );
    }
    info!(
        max_power_kw = curve.max_power_kw(),
        elapsed_s = timer.stop(),
        "performance curve complete"
    );

    Ok(curve)
}
