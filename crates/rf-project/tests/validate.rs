use rf_project::schema::*;
use rf_project::{ValidationError, validate_project};

fn base_project() -> Project {
    Project {
        version: 1,
        name: "Validation".to_string(),
        blade: vec![
            StationDef {
                r_m: 2.0,
                chord_m: 1.5,
                twist_deg: 8.0,
                airfoil: 1,
            },
            StationDef {
                r_m: 20.0,
                chord_m: 0.6,
                twist_deg: 0.0,
                airfoil: 1,
            },
        ],
        airfoils: vec![AirfoilDef {
            id: 1,
            name: None,
            polar: vec![[-5.0, -0.2, 0.01], [15.0, 1.4, 0.03]],
        }],
        solver: SolverDef::default(),
        studies: StudiesDef {
            curve: Some(CurveStudyDef {
                schedule: vec![ScheduleEntryDef {
                    wind_speed_mps: 7.0,
                    pitch_deg: 0.0,
                    rpm: 25.0,
                    reference_power_kw: None,
                    reference_thrust_kn: None,
                }],
                correction: CorrectionDef::default(),
            }),
            ..StudiesDef::default()
        },
    }
}

#[test]
fn base_project_validates() {
    validate_project(&base_project()).unwrap();
}

#[test]
fn rejects_future_version() {
    let mut project = base_project();
    project.version = 2;
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::UnsupportedVersion { version: 2 })
    ));
}

#[test]
fn rejects_single_station_blade() {
    let mut project = base_project();
    project.blade.truncate(1);
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::InvalidValue { field, .. }) if field == "blade"
    ));
}

#[test]
fn rejects_decreasing_radius() {
    let mut project = base_project();
    project.blade[1].r_m = 1.0;
    let err = validate_project(&project).unwrap_err();
    assert!(err.to_string().contains("non-decreasing"), "{err}");
}

#[test]
fn rejects_negative_chord() {
    let mut project = base_project();
    project.blade[0].chord_m = -0.1;
    assert!(validate_project(&project).is_err());
}

#[test]
fn rejects_duplicate_airfoil() {
    let mut project = base_project();
    let copy = project.airfoils[0].clone();
    project.airfoils.push(copy);
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::DuplicateId { id, .. }) if id == "1"
    ));
}

#[test]
fn rejects_unordered_polar() {
    let mut project = base_project();
    project.airfoils[0].polar.reverse();
    let err = validate_project(&project).unwrap_err();
    assert!(err.to_string().contains("ascending"), "{err}");
}

#[test]
fn rejects_non_finite_polar_entry() {
    let mut project = base_project();
    project.airfoils[0].polar[0][1] = f64::NAN;
    assert!(validate_project(&project).is_err());
}

#[test]
fn missing_polar_is_not_a_validation_error() {
    let mut project = base_project();
    project.airfoils.clear();
    validate_project(&project).unwrap();
}

#[test]
fn rejects_bad_solver_settings() {
    let mut project = base_project();
    project.solver.relaxation = 1.0;
    assert!(validate_project(&project).is_err());

    let mut project = base_project();
    project.solver.blade_count = 0;
    assert!(validate_project(&project).is_err());

    let mut project = base_project();
    project.solver.tolerance = 0.0;
    assert!(validate_project(&project).is_err());
}

#[test]
fn rejects_partial_reference_columns() {
    let mut project = base_project();
    let curve = project.studies.curve.as_mut().unwrap();
    let mut second = curve.schedule[0].clone();
    second.wind_speed_mps = 9.0;
    second.reference_power_kw = Some(120.0);
    curve.schedule.push(second);

    let err = validate_project(&project).unwrap_err();
    assert!(err.to_string().contains("every entry or none"), "{err}");
}

#[test]
fn rejects_empty_schedule() {
    let mut project = base_project();
    project.studies.curve.as_mut().unwrap().schedule.clear();
    assert!(validate_project(&project).is_err());
}

#[test]
fn energy_study_needs_curve() {
    let mut project = base_project();
    project.studies.curve = None;
    project.studies.energy = Some(EnergyStudyDef::default());
    assert!(matches!(
        validate_project(&project),
        Err(ValidationError::MissingReference { id, .. }) if id == "curve"
    ));
}

#[test]
fn rejects_empty_sweep() {
    let mut project = base_project();
    project.studies.surface = Some(SurfaceStudyDef {
        tsr: SweepDef::Values { values: vec![] },
        ..SurfaceStudyDef::default()
    });
    assert!(validate_project(&project).is_err());

    project.studies.surface = Some(SurfaceStudyDef {
        pitch_deg: SweepDef::Linear {
            start: 0.0,
            end: 5.0,
            points: 0,
        },
        ..SurfaceStudyDef::default()
    });
    assert!(validate_project(&project).is_err());
}

#[test]
fn rejects_negative_spanwise_rpm() {
    let mut project = base_project();
    project.studies.spanwise.push(OperatingPointDef {
        wind_speed_mps: 8.0,
        pitch_deg: 0.0,
        rpm: -1.0,
    });
    assert!(validate_project(&project).is_err());
}
