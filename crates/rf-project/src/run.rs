//! Execution of the studies configured in a project.

use crate::compile::{CompiledProject, compile};
use crate::schema::Project;
use crate::validate::validate_project;
use crate::{ProjectError, ProjectResult};
use rf_performance::{
    EnergyYield, PerformanceCurve, SurfacePeak, WindDistribution, compute_coefficient_surface,
    compute_performance_curve,
};
use rf_solver::{OperatingPoint, StationStatus, solve};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Everything a project run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<PerformanceCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spanwise: Vec<SpanwiseReport>,
    pub timing: RunTiming,
}

/// Coefficient surface with rows following `tsr` and columns following
/// `pitch_deg`.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceReport {
    pub wind_speed_mps: f64,
    pub pitch_deg: Vec<f64>,
    pub tsr: Vec<f64>,
    pub cp: Vec<Vec<f64>>,
    pub ct: Vec<Vec<f64>>,
    pub peak: Option<SurfacePeak>,
    pub unconverged_cells: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnergyReport {
    pub wind: WindDistribution,
    #[serde(flatten)]
    pub energy: EnergyYield,
}

/// Spanwise induction and load distribution at one operating point.
#[derive(Debug, Clone, Serialize)]
pub struct SpanwiseReport {
    pub wind_speed_mps: f64,
    pub pitch_deg: f64,
    pub rpm: f64,
    pub thrust_n: f64,
    pub torque_nm: f64,
    pub power_w: f64,
    pub r_m: Vec<f64>,
    pub axial_induction: Vec<f64>,
    pub tangential_induction: Vec<f64>,
    pub d_thrust_n: Vec<f64>,
    pub d_torque_nm: Vec<f64>,
    /// Passes per station; `None` for skipped, capped or unloaded stations
    pub iterations: Vec<Option<usize>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunTiming {
    pub compile_time_s: f64,
    pub curve_time_s: f64,
    pub surface_time_s: f64,
    pub spanwise_time_s: f64,
    pub total_time_s: f64,
    pub solves: usize,
}

/// Validate, compile and run every study in `project`.
pub fn run_project(project: &Project) -> ProjectResult<RunReport> {
    let started = Instant::now();
    validate_project(project)?;
    let compiled = compile(project)?;
    let compile_time_s = started.elapsed().as_secs_f64();

    let mut report = run_compiled(&compiled)?;
    report.timing.compile_time_s = compile_time_s;
    report.timing.total_time_s = started.elapsed().as_secs_f64();
    info!(
        project = %report.project,
        solves = report.timing.solves,
        total_time_s = report.timing.total_time_s,
        "project run complete"
    );
    Ok(report)
}

/// Run the studies of an already compiled project.
pub fn run_compiled(compiled: &CompiledProject) -> ProjectResult<RunReport> {
    let mut timing = RunTiming::default();

    let stage = Instant::now();
    let curve = compiled
        .curve
        .as_ref()
        .map(|inputs| {
            compute_performance_curve(
                &compiled.blade,
                &inputs.schedule,
                &compiled.polars,
                &compiled.config,
                inputs.correction.as_ref(),
                compiled.execution,
            )
        })
        .transpose()?;
    timing.curve_time_s = stage.elapsed().as_secs_f64();
    timing.solves += curve.as_ref().map_or(0, PerformanceCurve::len);

    let stage = Instant::now();
    let surface = compiled
        .surface
        .as_ref()
        .map(|inputs| {
            compute_coefficient_surface(
                &compiled.blade,
                &compiled.polars,
                &inputs.pitch_deg,
                &inputs.tsr,
                inputs.wind_speed,
                &compiled.config,
                compiled.execution,
            )
            .map(|s| SurfaceReport {
                wind_speed_mps: s.wind_speed,
                pitch_deg: inputs.pitch_deg.clone(),
                tsr: inputs.tsr.clone(),
                cp: s
                    .cp
                    .row_iter()
                    .map(|row| row.iter().copied().collect())
                    .collect(),
                ct: s
                    .ct
                    .row_iter()
                    .map(|row| row.iter().copied().collect())
                    .collect(),
                peak: s.peak_cp(),
                unconverged_cells: s.unconverged_cells,
            })
        })
        .transpose()?;
    timing.surface_time_s = stage.elapsed().as_secs_f64();
    timing.solves += surface
        .as_ref()
        .map_or(0, |s| s.pitch_deg.len() * s.tsr.len());

    let energy = match (&compiled.energy, &curve) {
        (Some(inputs), Some(curve)) => Some(EnergyReport {
            wind: inputs.wind,
            energy: curve.annual_energy(&inputs.wind, inputs.rated_power_kw)?,
        }),
        (Some(_), None) => {
            return Err(ProjectError::Study {
                what: "energy study needs a power curve".to_string(),
            });
        }
        (None, _) => None,
    };
    if let Some(e) = &energy {
        info!(
            aep_gwh = e.energy.aep_gwh,
            capacity_factor = e.energy.capacity_factor,
            "annual energy estimated"
        );
    }

    let stage = Instant::now();
    let spanwise = compiled
        .spanwise
        .iter()
        .map(|op| spanwise_report(compiled, op))
        .collect::<ProjectResult<Vec<_>>>()?;
    timing.spanwise_time_s = stage.elapsed().as_secs_f64();
    timing.solves += spanwise.len();

    Ok(RunReport {
        project: compiled.name.clone(),
        curve,
        surface,
        energy,
        spanwise,
        timing,
    })
}

fn spanwise_report(
    compiled: &CompiledProject,
    op: &OperatingPoint,
) -> ProjectResult<SpanwiseReport> {
    let sol = solve(&compiled.blade, op, &compiled.polars, &compiled.config)?;
    Ok(SpanwiseReport {
        wind_speed_mps: op.wind_speed(),
        pitch_deg: op.pitch_deg(),
        rpm: op.rpm(),
        thrust_n: sol.thrust_n,
        torque_nm: sol.torque_nm,
        power_w: sol.power_w,
        r_m: compiled.blade.radii().to_vec(),
        axial_induction: sol.axial_induction().collect(),
        tangential_induction: sol.tangential_induction().collect(),
        d_thrust_n: sol.elements.iter().map(|e| e.d_thrust).collect(),
        d_torque_nm: sol.elements.iter().map(|e| e.d_torque).collect(),
        iterations: sol
            .stations
            .iter()
            .map(|s| match s {
                StationStatus::Converged { iterations } => Some(*iterations),
                StationStatus::Skipped
                | StationStatus::IterationCap
                | StationStatus::Unloaded => None,
            })
            .collect(),
    })
}

/// Write a run report as pretty-printed JSON.
pub fn save_report_json(path: &std::path::Path, report: &RunReport) -> ProjectResult<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content)?;
    Ok(())
}
