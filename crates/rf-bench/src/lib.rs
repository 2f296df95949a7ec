//! Benchmark harness for rotorflow studies.

use rf_core::timing::{bem_timing, enable_timing};
use rf_project::{ProjectError, load_yaml, run_project};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A benchmark scenario definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkScenario {
    pub id: String,
    pub name: String,
    /// Project YAML file, relative to the repo root
    pub project_path: String,
    pub study: BenchmarkStudy,
    pub parallel: bool,
    pub notes: Option<String>,
}

/// Which study of the project a scenario exercises.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BenchmarkStudy {
    Spanwise,
    Curve,
    Surface,
}

/// Timing breakdown of a single run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunMetrics {
    pub total_time_s: f64,
    pub compile_time_s: f64,
    pub study_time_s: f64,
    pub solves: usize,
    /// Solver calls recorded by the solver timers
    pub solve_calls: u64,
    pub solve_average_s: f64,
    pub station_passes: u64,
}

/// Aggregated statistics for multiple runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub run_count: usize,
    pub total_time_median_s: f64,
    pub total_time_min_s: f64,
    pub total_time_max_s: f64,
    pub study_time_median_s: f64,
    pub solve_average_median_s: f64,
    pub station_passes_per_solve: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub scenario: BenchmarkScenario,
    pub runs: Vec<RunMetrics>,
    pub aggregate: AggregateMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// Run a single benchmark scenario `times` times.
pub fn run_scenario(
    scenario: &BenchmarkScenario,
    times: usize,
    repo_root: &Path,
) -> Result<BenchmarkResult, BenchError> {
    let mut project = load_yaml(&repo_root.join(&scenario.project_path))?;
    project.solver.parallel = scenario.parallel;
    let studies = &mut project.studies;
    match scenario.study {
        BenchmarkStudy::Spanwise => {
            studies.curve = None;
            studies.surface = None;
        }
        BenchmarkStudy::Curve => {
            studies.surface = None;
            studies.spanwise.clear();
        }
        BenchmarkStudy::Surface => {
            studies.curve = None;
            studies.spanwise.clear();
        }
    }
    if studies.curve.is_none() {
        studies.energy = None;
    }

    enable_timing();
    let mut runs = Vec::with_capacity(times);
    for _ in 0..times {
        bem_timing::reset_all();
        let report = run_project(&project)?;
        let solver = bem_timing::summary();
        let timing = &report.timing;
        runs.push(RunMetrics {
            total_time_s: timing.total_time_s,
            compile_time_s: timing.compile_time_s,
            study_time_s: timing.curve_time_s + timing.surface_time_s + timing.spanwise_time_s,
            solves: timing.solves,
            solve_calls: solver.solve_count,
            solve_average_s: solver.solve_average_s,
            station_passes: solver.station_passes,
        });
    }

    let aggregate = compute_aggregates(&runs);
    info!(
        scenario = %scenario.id,
        runs = aggregate.run_count,
        median_s = aggregate.total_time_median_s,
        "benchmark scenario complete"
    );
    Ok(BenchmarkResult {
        scenario: scenario.clone(),
        runs,
        aggregate,
    })
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    values[values.len() / 2]
}

pub fn compute_aggregates(runs: &[RunMetrics]) -> AggregateMetrics {
    let totals: Vec<f64> = runs.iter().map(|r| r.total_time_s).collect();
    let calls: u64 = runs.iter().map(|r| r.solve_calls).sum();
    let passes: u64 = runs.iter().map(|r| r.station_passes).sum();

    AggregateMetrics {
        run_count: runs.len(),
        total_time_median_s: median(totals.clone()),
        total_time_min_s: totals.iter().copied().reduce(f64::min).unwrap_or(0.0),
        total_time_max_s: totals.iter().copied().reduce(f64::max).unwrap_or(0.0),
        study_time_median_s: median(runs.iter().map(|r| r.study_time_s).collect()),
        solve_average_median_s: median(runs.iter().map(|r| r.solve_average_s).collect()),
        station_passes_per_solve: (calls > 0).then(|| passes as f64 / calls as f64),
    }
}

/// Default benchmark set over the bundled reference rotor.
pub fn default_benchmarks() -> Vec<BenchmarkScenario> {
    let scenario = |id: &str, name: &str, study, parallel, notes: &str| BenchmarkScenario {
        id: id.to_string(),
        name: name.to_string(),
        project_path: "projects/reference_rotor.yaml".to_string(),
        study,
        parallel,
        notes: Some(notes.to_string()),
    };
    vec![
        scenario(
            "01_spanwise",
            "Single operating point",
            BenchmarkStudy::Spanwise,
            false,
            "One solve with spanwise output; per-call baseline",
        ),
        scenario(
            "02_curve",
            "Power curve",
            BenchmarkStudy::Curve,
            true,
            "17-point schedule with rated limiter and AEP",
        ),
        scenario(
            "03_surface_serial",
            "Cp/Ct surface (serial)",
            BenchmarkStudy::Surface,
            false,
            "21 x 17 grid on one thread",
        ),
        scenario(
            "04_surface_parallel",
            "Cp/Ct surface (parallel)",
            BenchmarkStudy::Surface,
            true,
            "21 x 17 grid on the rayon pool",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_root() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
    }

    #[test]
    fn aggregate_computes_median_and_range() {
        let runs = vec![
            RunMetrics {
                total_time_s: 1.0,
                study_time_s: 0.8,
                solve_calls: 10,
                station_passes: 200,
                ..Default::default()
            },
            RunMetrics {
                total_time_s: 3.0,
                study_time_s: 2.5,
                solve_calls: 10,
                station_passes: 300,
                ..Default::default()
            },
            RunMetrics {
                total_time_s: 2.0,
                study_time_s: 1.6,
                solve_calls: 10,
                station_passes: 250,
                ..Default::default()
            },
        ];

        let agg = compute_aggregates(&runs);

        assert_eq!(agg.run_count, 3);
        assert_eq!(agg.total_time_median_s, 2.0);
        assert_eq!(agg.total_time_min_s, 1.0);
        assert_eq!(agg.total_time_max_s, 3.0);
        assert_eq!(agg.study_time_median_s, 1.6);
        assert_eq!(agg.station_passes_per_solve, Some(25.0));
    }

    #[test]
    fn aggregate_handles_empty_runs() {
        let agg = compute_aggregates(&[]);
        assert_eq!(agg.run_count, 0);
        assert_eq!(agg.total_time_median_s, 0.0);
        assert_eq!(agg.station_passes_per_solve, None);
    }

    #[test]
    fn default_benchmarks_point_at_existing_projects() {
        let root = repo_root();
        for scenario in default_benchmarks() {
            assert!(
                root.join(&scenario.project_path).exists(),
                "{} missing",
                scenario.project_path
            );
        }
    }

    #[test]
    fn spanwise_scenario_runs() {
        let scenario = &default_benchmarks()[0];
        let result = run_scenario(scenario, 2, &repo_root()).unwrap();
        assert_eq!(result.runs.len(), 2);
        assert!(result.runs.iter().all(|r| r.solves == 1));
        assert!(result.aggregate.total_time_max_s >= result.aggregate.total_time_min_s);
    }

    #[test]
    fn benchmark_suite_serializes() {
        let suite = BenchmarkSuite {
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            results: vec![],
        };

        let json = serde_json::to_string(&suite).expect("should serialize");
        let deserialized: BenchmarkSuite = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized.timestamp, suite.timestamp);
        assert!(deserialized.results.is_empty());
    }
}
