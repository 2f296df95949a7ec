//! Power and thrust coefficient surfaces over pitch and tip-speed ratio.

use crate::error::{PerformanceError, PerformanceResult};
use crate::execution::Execution;
use nalgebra::DMatrix;
use rf_airfoils::PolarDatabase;
use rf_core::timing::Timer;
use rf_solver::{BemConfig, BladeGeometry, OperatingPoint, solve};
use std::f64::consts::PI;
use tracing::{info, warn};

/// `Cp` and `Ct` on a tip-speed-ratio × pitch grid.
///
/// Row `i` corresponds to `tsr[i]`, column `j` to `pitch[j]`, for the input
/// grids and both coefficient matrices.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientSurface {
    /// Reference wind speed (m/s)
    pub wind_speed: f64,
    pub pitch_grid: DMatrix<f64>,
    pub tsr_grid: DMatrix<f64>,
    pub cp: DMatrix<f64>,
    pub ct: DMatrix<f64>,
    /// Cells with at least one unconverged station
    pub unconverged_cells: usize,
}

/// Location and value of the best power coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfacePeak {
    pub pitch_deg: f64,
    pub tsr: f64,
    pub cp: f64,
}

impl CoefficientSurface {
    pub fn shape(&self) -> (usize, usize) {
        self.cp.shape()
    }

    /// Maximum `Cp` cell, or `None` for an empty surface.
    pub fn peak_cp(&self) -> Option<SurfacePeak> {
        let (rows, cols) = self.cp.shape();
        let mut best: Option<(usize, usize)> = None;
        for i in 0..rows {
            for j in 0..cols {
                if best.is_none_or(|(bi, bj)| self.cp[(i, j)] > self.cp[(bi, bj)]) {
                    best = Some((i, j));
                }
            }
        }
        best.map(|(i, j)| SurfacePeak {
            pitch_deg: self.pitch_grid[(i, j)],
            tsr: self.tsr_grid[(i, j)],
            cp: self.cp[(i, j)],
        })
    }
}

/// Rotor speed (rev/min) that gives tip-speed ratio `tsr` at `wind_speed`.
#[inline]
pub fn rpm_for_tip_speed_ratio(tsr: f64, wind_speed: f64, radius: f64) -> f64 {
    tsr * wind_speed * 60.0 / (2.0 * PI * radius)
}

/// Solve every (tsr, pitch) combination at `wind_speed` and normalize the
/// loads by the rotor disk.
///
/// `Cp = P / (½ρAv³)`, `Ct = T / (½ρAv²)` with `A = πR²`.
pub fn compute_coefficient_surface(
    blade: &BladeGeometry,
    polars: &PolarDatabase,
    pitch_deg: &[f64],
    tsr: &[f64],
    wind_speed: f64,
    config: &BemConfig,
    execution: Execution,
) -> PerformanceResult<CoefficientSurface> {
    if pitch_deg.is_empty() || tsr.is_empty() {
        return Err(PerformanceError::Sweep {
            what: format!(
                "surface needs at least one pitch and one tsr, got {} x {}",
                tsr.len(),
                pitch_deg.len()
            ),
        });
    }
    if pitch_deg.iter().chain(tsr).any(|v| !v.is_finite()) {
        return Err(PerformanceError::Sweep {
            what: "sweep contains non-finite values".into(),
        });
    }
    if !(wind_speed.is_finite() && wind_speed > 0.0) {
        return Err(PerformanceError::Sweep {
            what: format!("reference wind speed must be positive, got {wind_speed}"),
        });
    }

    let timer = Timer::start();
    let (rows, cols) = (tsr.len(), pitch_deg.len());
    info!(rows, cols, wind_speed, ?execution, "computing coefficient surface");

    let radius = blade.tip_radius();
    let area = PI * radius * radius;
    let q = 0.5 * config.air_density * area;

    let cells: Vec<(usize, usize)> = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .collect();
    let values = execution.try_map(&cells, |&(i, j)| {
        let context = || format!("tsr {} pitch {} deg", tsr[i], pitch_deg[j]);
        let rpm = rpm_for_tip_speed_ratio(tsr[i], wind_speed, radius);
        let op = OperatingPoint::new(wind_speed, pitch_deg[j], rpm)
            .map_err(|e| PerformanceError::solve(context(), e))?;
        let sol =
            solve(blade, &op, polars, config).map_err(|e| PerformanceError::solve(context(), e))?;
        Ok::<_, PerformanceError>((
            sol.power_w / (q * wind_speed.powi(3)),
            sol.thrust_n / (q * wind_speed.powi(2)),
            sol.converged(),
        ))
    })?;

    let cp = DMatrix::from_fn(rows, cols, |i, j| values[i * cols + j].0);
    let ct = DMatrix::from_fn(rows, cols, |i, j| values[i * cols + j].1);
    let unconverged_cells = values.iter().filter(|v| !v.2).count();

    let surface = CoefficientSurface {
        wind_speed,
        pitch_grid: DMatrix::from_fn(rows, cols, |_, j| pitch_deg[j]),
        tsr_grid: DMatrix::from_fn(rows, cols, |i, _| tsr[i]),
        cp,
        ct,
        unconverged_cells,
    };

    if unconverged_cells > 0 {
        warn!(
            unconverged_cells,
            cells = rows * cols,
            "coefficient surface contains cells with unconverged stations"
        );
    }
    let peak = surface.peak_cp();
    info!(
        peak_cp = peak.map(|p| p.cp),
        peak_tsr = peak.map(|p| p.tsr),
        peak_pitch = peak.map(|p| p.pitch_deg),
        elapsed_s = timer.stop(),
        "coefficient surface complete"
    );

    Ok(surface)
}
