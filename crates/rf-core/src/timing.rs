//! Lightweight performance timing utilities.
//!
//! Sweeps call the element solver thousands of times, so the solver records
//! its wall time into process-wide accumulators when timing is switched on
//! (programmatically or via the `RF_TIMING` environment variable).

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
/// `RF_TIMING`, read once per process
static ENV_ENABLED: OnceLock<bool> = OnceLock::new();

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
        || *ENV_ENABLED.get_or_init(|| std::env::var_os("RF_TIMING").is_some())
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Create and start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    /// Whether this timer will record anything.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }

    /// Stop the timer and add the elapsed time to `acc` if enabled.
    pub fn stop_into(self, acc: &AccumulatingTimer) {
        if let Some(elapsed) = self.stop() {
            acc.record(elapsed);
        }
    }
}

/// Accumulating timer for tracking total time across multiple calls.
///
/// Safe to record into from rayon workers.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    /// Create a new accumulating timer.
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record a timing measurement.
    pub fn record(&self, duration_s: f64) {
        let nanos = (duration_s * 1e9) as u64;
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_ns.load(Ordering::Relaxed) as f64 / 1e9
    }

    /// Get number of calls.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Get average time per call (in seconds).
    pub fn average_seconds(&self) -> f64 {
        let count = self.count();
        if count > 0 {
            self.total_seconds() / count as f64
        } else {
            0.0
        }
    }

    /// Reset the timer.
    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

/// Blade-element solver timers.
pub mod bem_timing {
    use super::AccumulatingTimer;

    /// Wall time of complete operating-point solves
    pub static SOLVE_CALLS: AccumulatingTimer = AccumulatingTimer::new();
    /// Fixed-point passes over all stations, one count per pass
    pub static STATION_PASSES: AtomicCounter = AtomicCounter::new();

    /// Plain event counter next to the timers.
    pub struct AtomicCounter(std::sync::atomic::AtomicU64);

    impl AtomicCounter {
        pub const fn new() -> Self {
            Self(std::sync::atomic::AtomicU64::new(0))
        }

        pub fn add(&self, n: u64) {
            self.0.fetch_add(n, std::sync::atomic::Ordering::Relaxed);
        }

        pub fn get(&self) -> u64 {
            self.0.load(std::sync::atomic::Ordering::Relaxed)
        }

        pub fn reset(&self) {
            self.0.store(0, std::sync::atomic::Ordering::Relaxed);
        }
    }

    /// Reset all solver timers.
    pub fn reset_all() {
        SOLVE_CALLS.reset();
        STATION_PASSES.reset();
    }

    /// Snapshot of the solver timers.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct BemTimingSummary {
        pub solve_count: u64,
        pub solve_total_s: f64,
        pub solve_average_s: f64,
        pub station_passes: u64,
    }

    pub fn summary() -> BemTimingSummary {
        BemTimingSummary {
            solve_count: SOLVE_CALLS.count(),
            solve_total_s: SOLVE_CALLS.total_seconds(),
            solve_average_s: SOLVE_CALLS.average_seconds(),
            station_passes: STATION_PASSES.get(),
        }
    }
}
