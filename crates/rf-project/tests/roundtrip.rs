use rf_project::schema::*;
use rf_project::{load_json, load_yaml, save_json, save_yaml, validate_project};

fn small_project() -> Project {
    Project {
        version: 1,
        name: "Two Station Rotor".to_string(),
        blade: vec![
            StationDef {
                r_m: 1.0,
                chord_m: 0.8,
                twist_deg: 10.0,
                airfoil: 7,
            },
            StationDef {
                r_m: 12.0,
                chord_m: 0.4,
                twist_deg: 0.5,
                airfoil: 7,
            },
        ],
        airfoils: vec![AirfoilDef {
            id: 7,
            name: Some("flat plate".to_string()),
            polar: vec![[-10.0, -1.0, 0.02], [0.0, 0.0, 0.01], [10.0, 1.0, 0.02]],
        }],
        solver: SolverDef::default(),
        studies: StudiesDef::default(),
    }
}

#[test]
fn roundtrip_yaml_minimal_project() {
    let project = small_project();
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("rf_project_roundtrip_minimal.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_with_studies() {
    let mut project = small_project();
    project.solver.convergence = ConvergenceDef::Reject;
    project.studies = StudiesDef {
        curve: Some(CurveStudyDef {
            schedule: vec![
                ScheduleEntryDef {
                    wind_speed_mps: 6.0,
                    pitch_deg: 0.0,
                    rpm: 40.0,
                    reference_power_kw: Some(20.0),
                    reference_thrust_kn: None,
                },
                ScheduleEntryDef {
                    wind_speed_mps: 9.0,
                    pitch_deg: 0.0,
                    rpm: 60.0,
                    reference_power_kw: Some(70.0),
                    reference_thrust_kn: None,
                },
            ],
            correction: CorrectionDef::None,
        }),
        surface: Some(SurfaceStudyDef {
            pitch_deg: SweepDef::Values {
                values: vec![0.0, 5.0],
            },
            ..SurfaceStudyDef::default()
        }),
        energy: Some(EnergyStudyDef {
            rated_power_kw: Some(100.0),
            ..EnergyStudyDef::default()
        }),
        spanwise: vec![OperatingPointDef {
            wind_speed_mps: 8.0,
            pitch_deg: 1.0,
            rpm: 50.0,
        }],
    };
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("rf_project_roundtrip_studies.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_default_correction() {
    let mut project = small_project();
    project.studies.curve = Some(CurveStudyDef {
        schedule: vec![ScheduleEntryDef {
            wind_speed_mps: 10.0,
            pitch_deg: 0.0,
            rpm: 60.0,
            reference_power_kw: None,
            reference_thrust_kn: None,
        }],
        correction: CorrectionDef::default(),
    });

    let path = std::env::temp_dir().join("rf_project_roundtrip.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn omitted_sections_take_defaults() {
    let yaml = r#"
version: 1
name: Sparse
blade:
  - { r_m: 1.0, chord_m: 1.0, twist_deg: 0.0, airfoil: 1 }
  - { r_m: 5.0, chord_m: 0.5, twist_deg: 0.0, airfoil: 1 }
studies:
  curve:
    schedule:
      - { wind_speed_mps: 8.0, pitch_deg: 0.0, rpm: 30.0 }
  surface: {}
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    validate_project(&project).unwrap();

    assert!(project.airfoils.is_empty());
    assert_eq!(project.solver, SolverDef::default());
    let curve = project.studies.curve.unwrap();
    assert_eq!(curve.correction, CorrectionDef::default());
    assert_eq!(project.studies.surface.unwrap(), SurfaceStudyDef::default());
}

#[test]
fn save_rejects_invalid_project() {
    let mut project = small_project();
    project.version = 99;
    let path = std::env::temp_dir().join("rf_project_invalid.yaml");
    assert!(save_yaml(&path, &project).is_err());
}
