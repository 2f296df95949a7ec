//! Compilation of a project document into solver and study inputs.

use crate::ProjectResult;
use crate::schema::{
    ConvergenceDef, CorrectionDef, CurveStudyDef, OperatingPointDef, Project, SolverDef,
    SurfaceStudyDef, SweepDef,
};
use rf_airfoils::{AirfoilPolar, PolarDatabase};
use rf_core::AirfoilId;
use rf_performance::{
    CurveCorrection, Execution, NoCorrection, OperationalSchedule, RatedLimiter, SweepDefinition,
    WindDistribution,
};
use rf_solver::{BemConfig, BladeGeometry, BladeStation, ConvergencePolicy, OperatingPoint};
use tracing::warn;

/// Runtime form of a project.
pub struct CompiledProject {
    pub name: String,
    pub blade: BladeGeometry,
    pub polars: PolarDatabase,
    pub config: BemConfig,
    pub execution: Execution,
    pub curve: Option<CurveInputs>,
    pub surface: Option<SurfaceInputs>,
    pub energy: Option<EnergyInputs>,
    pub spanwise: Vec<OperatingPoint>,
}

pub struct CurveInputs {
    pub schedule: OperationalSchedule,
    pub correction: Box<dyn CurveCorrection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceInputs {
    pub pitch_deg: Vec<f64>,
    pub tsr: Vec<f64>,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyInputs {
    pub wind: WindDistribution,
    pub rated_power_kw: f64,
}

/// Build runtime inputs from a validated project.
pub fn compile(project: &Project) -> ProjectResult<CompiledProject> {
    let stations: Vec<BladeStation> = project
        .blade
        .iter()
        .map(|s| BladeStation {
            r: s.r_m,
            chord: s.chord_m,
            twist_deg: s.twist_deg,
            airfoil: AirfoilId::new(s.airfoil),
        })
        .collect();
    let blade = BladeGeometry::from_stations(&stations)?;

    let mut polars = PolarDatabase::new();
    for airfoil in &project.airfoils {
        polars.insert(AirfoilId::new(airfoil.id), AirfoilPolar::from_rows(&airfoil.polar)?);
    }
    let mut missing: Vec<u32> = project
        .blade
        .iter()
        .map(|s| s.airfoil)
        .filter(|id| !polars.contains(AirfoilId::new(*id)))
        .collect();
    missing.sort_unstable();
    missing.dedup();
    if !missing.is_empty() {
        warn!(
            ?missing,
            "blade references airfoils without polars; fallback coefficients will be used"
        );
    }

    let config = compile_solver(&project.solver);
    config.validate()?;
    let execution = if project.solver.parallel {
        Execution::Parallel
    } else {
        Execution::Serial
    };

    let curve = project
        .studies
        .curve
        .as_ref()
        .map(compile_curve)
        .transpose()?;
    let surface = project
        .studies
        .surface
        .as_ref()
        .map(compile_surface)
        .transpose()?;

    let energy = project.studies.energy.as_ref().map(|e| {
        let limiter_rated = project
            .studies
            .curve
            .as_ref()
            .and_then(|c| match &c.correction {
                CorrectionDef::RatedLimiter { rated_power_kw, .. } => Some(*rated_power_kw),
                CorrectionDef::None => None,
            });
        EnergyInputs {
            wind: WindDistribution {
                scale: e.weibull_scale_mps,
                shape: e.weibull_shape,
            },
            rated_power_kw: e
                .rated_power_kw
                .or(limiter_rated)
                .unwrap_or(RatedLimiter::default().rated_power_kw),
        }
    });

    let spanwise = project
        .studies
        .spanwise
        .iter()
        .map(compile_operating_point)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledProject {
        name: project.name.clone(),
        blade,
        polars,
        config,
        execution,
        curve,
        surface,
        energy,
        spanwise,
    })
}

fn compile_solver(def: &SolverDef) -> BemConfig {
    BemConfig {
        air_density: def.air_density_kg_m3,
        blade_count: def.blade_count,
        hub_cutoff_fraction: def.hub_cutoff_fraction,
        max_iterations: def.max_iterations,
        tolerance: def.tolerance,
        relaxation: def.relaxation,
        convergence: match def.convergence {
            ConvergenceDef::Accept => ConvergencePolicy::Accept,
            ConvergenceDef::Reject => ConvergencePolicy::Reject,
        },
        ..BemConfig::default()
    }
}

fn compile_curve(def: &CurveStudyDef) -> ProjectResult<CurveInputs> {
    let column = |f: fn(&crate::schema::ScheduleEntryDef) -> f64| -> Vec<f64> {
        def.schedule.iter().map(f).collect()
    };
    let mut schedule = OperationalSchedule::new(
        column(|e| e.wind_speed_mps),
        column(|e| e.pitch_deg),
        column(|e| e.rpm),
    )?;

    let power: Option<Vec<f64>> = def.schedule.iter().map(|e| e.reference_power_kw).collect();
    if let Some(power) = power {
        schedule = schedule.with_reference_power(power)?;
    }
    let thrust: Option<Vec<f64>> = def.schedule.iter().map(|e| e.reference_thrust_kn).collect();
    if let Some(thrust) = thrust {
        schedule = schedule.with_reference_thrust(thrust)?;
    }

    let correction: Box<dyn CurveCorrection> = match &def.correction {
        CorrectionDef::None => Box::new(NoCorrection),
        CorrectionDef::RatedLimiter {
            rated_power_kw,
            default_rated_wind_speed_mps,
            pitch_jump_deg,
            derate_margin_mps,
            derate_factor,
        } => Box::new(RatedLimiter {
            rated_power_kw: *rated_power_kw,
            default_rated_wind_speed: *default_rated_wind_speed_mps,
            pitch_jump_deg: *pitch_jump_deg,
            derate_margin: *derate_margin_mps,
            derate_factor: *derate_factor,
        }),
    };

    Ok(CurveInputs {
        schedule,
        correction,
    })
}

fn compile_surface(def: &SurfaceStudyDef) -> ProjectResult<SurfaceInputs> {
    Ok(SurfaceInputs {
        pitch_deg: sweep_definition(&def.pitch_deg).points()?,
        tsr: sweep_definition(&def.tsr).points()?,
        wind_speed: def.wind_speed_mps,
    })
}

fn sweep_definition(def: &SweepDef) -> SweepDefinition {
    match def {
        SweepDef::Linear { start, end, points } => SweepDefinition::linear(*start, *end, *points),
        SweepDef::Values { values } => SweepDefinition::Values(values.clone()),
    }
}

fn compile_operating_point(def: &OperatingPointDef) -> ProjectResult<OperatingPoint> {
    Ok(OperatingPoint::new(
        def.wind_speed_mps,
        def.pitch_deg,
        def.rpm,
    )?)
}
