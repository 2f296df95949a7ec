//! rf-project: canonical rotor project format, validation and study runs.
//!
//! A project carries the blade, the airfoil polars, solver settings and the
//! studies to run, in YAML or JSON.

pub mod compile;
pub mod run;
pub mod schema;
pub mod validate;

pub use compile::{CompiledProject, CurveInputs, EnergyInputs, SurfaceInputs, compile};
pub use run::{
    EnergyReport, RunReport, RunTiming, SpanwiseReport, SurfaceReport, run_compiled, run_project,
    save_report_json,
};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_project};

use rf_airfoils::AirfoilError;
use rf_performance::PerformanceError;
use rf_solver::SolverError;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Airfoil error: {0}")]
    Airfoil(#[from] AirfoilError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Performance error: {0}")]
    Performance(#[from] PerformanceError),

    #[error("Study error: {what}")]
    Study { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_json(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}
