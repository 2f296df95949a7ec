//! Project validation logic.

use crate::schema::{
    AirfoilDef, CorrectionDef, CurveStudyDef, Project, SolverDef, StationDef, SurfaceStudyDef,
    SweepDef,
};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    validate_blade(&project.blade)?;

    let mut airfoil_ids = HashSet::new();
    for airfoil in &project.airfoils {
        if !airfoil_ids.insert(airfoil.id) {
            return Err(ValidationError::DuplicateId {
                id: airfoil.id.to_string(),
                context: "airfoils".to_string(),
            });
        }
        validate_airfoil(airfoil)?;
    }

    validate_solver(&project.solver)?;

    let studies = &project.studies;
    if let Some(curve) = &studies.curve {
        validate_curve(curve)?;
    }
    if let Some(surface) = &studies.surface {
        validate_surface(surface)?;
    }
    if let Some(energy) = &studies.energy {
        if studies.curve.is_none() {
            return Err(ValidationError::MissingReference {
                id: "curve".to_string(),
                context: "energy study".to_string(),
            });
        }
        validate_positive_finite("energy weibull_scale_mps", energy.weibull_scale_mps)?;
        validate_positive_finite("energy weibull_shape", energy.weibull_shape)?;
        if let Some(rated) = energy.rated_power_kw {
            validate_positive_finite("energy rated_power_kw", rated)?;
        }
    }
    for (i, op) in studies.spanwise.iter().enumerate() {
        validate_positive_finite(&format!("spanwise[{i}] wind_speed_mps"), op.wind_speed_mps)?;
        validate_finite(&format!("spanwise[{i}] pitch_deg"), op.pitch_deg)?;
        validate_non_negative_finite(&format!("spanwise[{i}] rpm"), op.rpm)?;
    }

    Ok(())
}

fn validate_blade(blade: &[StationDef]) -> Result<(), ValidationError> {
    if blade.len() < 2 {
        return Err(ValidationError::InvalidValue {
            field: "blade".to_string(),
            value: blade.len().to_string(),
            reason: "at least 2 stations are required".to_string(),
        });
    }
    for (i, station) in blade.iter().enumerate() {
        validate_non_negative_finite(&format!("blade[{i}] r_m"), station.r_m)?;
        validate_non_negative_finite(&format!("blade[{i}] chord_m"), station.chord_m)?;
        validate_finite(&format!("blade[{i}] twist_deg"), station.twist_deg)?;
        if i > 0 && station.r_m < blade[i - 1].r_m {
            return Err(ValidationError::InvalidValue {
                field: format!("blade[{i}] r_m"),
                value: station.r_m.to_string(),
                reason: "radii must be non-decreasing".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_airfoil(airfoil: &AirfoilDef) -> Result<(), ValidationError> {
    if airfoil.polar.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("airfoil {} polar", airfoil.id),
            value: "[]".to_string(),
            reason: "polar must have at least one row".to_string(),
        });
    }
    for (row, values) in airfoil.polar.iter().enumerate() {
        for value in values {
            validate_finite(&format!("airfoil {} polar[{row}]", airfoil.id), *value)?;
        }
        if row > 0 && values[0] < airfoil.polar[row - 1][0] {
            return Err(ValidationError::InvalidValue {
                field: format!("airfoil {} polar[{row}] alpha", airfoil.id),
                value: values[0].to_string(),
                reason: "angles of attack must be ascending".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    validate_positive_finite("solver air_density_kg_m3", solver.air_density_kg_m3)?;
    validate_positive_finite("solver tolerance", solver.tolerance)?;
    if solver.blade_count == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver blade_count".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if solver.max_iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver max_iterations".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    validate_unit_interval("solver relaxation", solver.relaxation)?;
    validate_unit_interval("solver hub_cutoff_fraction", solver.hub_cutoff_fraction)?;
    Ok(())
}

fn validate_curve(curve: &CurveStudyDef) -> Result<(), ValidationError> {
    if curve.schedule.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "curve schedule".to_string(),
            value: "[]".to_string(),
            reason: "schedule must have at least one entry".to_string(),
        });
    }
    for (i, entry) in curve.schedule.iter().enumerate() {
        validate_positive_finite(&format!("schedule[{i}] wind_speed_mps"), entry.wind_speed_mps)?;
        validate_finite(&format!("schedule[{i}] pitch_deg"), entry.pitch_deg)?;
        validate_non_negative_finite(&format!("schedule[{i}] rpm"), entry.rpm)?;
    }

    let with_power = curve
        .schedule
        .iter()
        .filter(|e| e.reference_power_kw.is_some())
        .count();
    let with_thrust = curve
        .schedule
        .iter()
        .filter(|e| e.reference_thrust_kn.is_some())
        .count();
    for (name, count) in [
        ("reference_power_kw", with_power),
        ("reference_thrust_kn", with_thrust),
    ] {
        if count != 0 && count != curve.schedule.len() {
            return Err(ValidationError::InvalidValue {
                field: format!("schedule {name}"),
                value: format!("{count} of {}", curve.schedule.len()),
                reason: "must be given for every entry or none".to_string(),
            });
        }
    }

    if let CorrectionDef::RatedLimiter {
        rated_power_kw,
        default_rated_wind_speed_mps,
        derate_factor,
        ..
    } = &curve.correction
    {
        validate_positive_finite("correction rated_power_kw", *rated_power_kw)?;
        validate_positive_finite(
            "correction default_rated_wind_speed_mps",
            *default_rated_wind_speed_mps,
        )?;
        validate_positive_finite("correction derate_factor", *derate_factor)?;
    }
    Ok(())
}

fn validate_surface(surface: &SurfaceStudyDef) -> Result<(), ValidationError> {
    validate_positive_finite("surface wind_speed_mps", surface.wind_speed_mps)?;
    validate_sweep("surface pitch_deg", &surface.pitch_deg)?;
    validate_sweep("surface tsr", &surface.tsr)?;
    Ok(())
}

fn validate_sweep(field: &str, sweep: &SweepDef) -> Result<(), ValidationError> {
    match sweep {
        SweepDef::Linear { start, end, points } => {
            validate_finite(&format!("{field} start"), *start)?;
            validate_finite(&format!("{field} end"), *end)?;
            if *points == 0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("{field} points"),
                    value: "0".to_string(),
                    reason: "sweep must have at least one point".to_string(),
                });
            }
        }
        SweepDef::Values { values } => {
            if values.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    value: "[]".to_string(),
                    reason: "sweep must have at least one point".to_string(),
                });
            }
            for v in values {
                validate_finite(field, *v)?;
            }
        }
    }
    Ok(())
}

fn validate_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

fn validate_positive_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

fn validate_non_negative_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}

fn validate_unit_interval(field: &str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..1.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must lie in [0, 1)".to_string(),
        });
    }
    Ok(())
}
