//! Standalone benchmark runner for rotorflow.

use rf_bench::{BenchmarkSuite, default_benchmarks, run_scenario};
use std::fs;
use std::path::PathBuf;

const RUNS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let crate_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = crate_path
        .parent()
        .and_then(|p| p.parent())
        .ok_or("Could not determine repo root")?
        .to_path_buf();

    println!("Rotorflow Benchmark Suite");
    println!("=========================\n");

    let benchmarks = default_benchmarks();
    println!("Running {} benchmarks, {RUNS} runs each...\n", benchmarks.len());

    let mut results = Vec::new();
    for (idx, scenario) in benchmarks.iter().enumerate() {
        print!("[{}/{}] {} ... ", idx + 1, benchmarks.len(), scenario.name);
        std::io::Write::flush(&mut std::io::stdout())?;

        match run_scenario(scenario, RUNS, &repo_root) {
            Ok(result) => {
                println!("OK ({:.3}s median)", result.aggregate.total_time_median_s);
                results.push(result);
            }
            Err(e) => {
                println!("FAILED");
                eprintln!("  Error: {e}");
            }
        }
    }

    println!();
    for result in &results {
        let agg = &result.aggregate;
        println!("{}", result.scenario.name);
        println!(
            "  Total time:  {:.4}s (median), min: {:.4}s, max: {:.4}s",
            agg.total_time_median_s, agg.total_time_min_s, agg.total_time_max_s
        );
        println!("  Per solve:   {:.6}s (median)", agg.solve_average_median_s);
        if let Some(passes) = agg.station_passes_per_solve {
            println!("  Passes:      {passes:.1} per solve");
        }
        println!();
    }

    let suite = BenchmarkSuite {
        timestamp: chrono::Utc::now().to_rfc3339(),
        results,
    };
    let dir = repo_root.join("benchmarks");
    fs::create_dir_all(&dir)?;
    let path = dir.join("baseline.json");
    fs::write(&path, serde_json::to_string_pretty(&suite)?)?;
    println!("Baseline saved to: {}", path.display());

    Ok(())
}
