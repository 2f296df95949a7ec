//! Solver configuration.

use crate::error::{SolverError, SolverResult};
use rf_core::units::constants::AIR_DENSITY_KG_M3;

/// What to do when a station's induction iteration hits `max_iterations`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConvergencePolicy {
    /// Keep the last relaxed estimate and report the station as capped.
    #[default]
    Accept,
    /// Fail the solve with [`SolverError::ConvergenceFailed`].
    Reject,
}

/// Blade-element-momentum solver configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct BemConfig {
    /// Air density (kg/m³)
    pub air_density: f64,
    /// Number of blades
    pub blade_count: u32,
    /// Stations with `r < hub_cutoff_fraction * R` carry no load
    pub hub_cutoff_fraction: f64,
    /// Maximum fixed-point passes per station
    pub max_iterations: usize,
    /// Convergence threshold on both induction factor changes
    pub tolerance: f64,
    /// Weight kept on the previous estimate at each update
    pub relaxation: f64,
    /// Upper limit on the raw axial induction estimate
    pub axial_cap: f64,
    /// Allowed range of the relaxed axial induction factor
    pub axial_bounds: (f64, f64),
    /// Allowed range of the relaxed tangential induction factor
    pub tangential_bounds: (f64, f64),
    /// `(cl, cd)` used when a station references an airfoil with no polar
    pub fallback_coefficients: (f64, f64),
    /// Tip-loss factor used when the inflow angle is numerically zero
    pub degenerate_tip_loss: f64,
    pub convergence: ConvergencePolicy,
}

impl Default for BemConfig {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY_KG_M3,
            blade_count: 3,
            hub_cutoff_fraction: 0.01,
            max_iterations: 100,
            tolerance: 1e-5,
            relaxation: 0.5,
            axial_cap: 0.4,
            axial_bounds: (0.0, 0.5),
            tangential_bounds: (-0.5, 0.5),
            fallback_coefficients: (0.0001, 0.35),
            degenerate_tip_loss: 0.99,
            convergence: ConvergencePolicy::Accept,
        }
    }
}

impl BemConfig {
    /// Check that every field is usable by the solver.
    pub fn validate(&self) -> SolverResult<()> {
        let bad = |what: String| Err(SolverError::Config { what });

        if !(self.air_density.is_finite() && self.air_density > 0.0) {
            return bad(format!("air density must be positive, got {}", self.air_density));
        }
        if self.blade_count == 0 {
            return bad("blade count must be at least 1".into());
        }
        if !(0.0..1.0).contains(&self.hub_cutoff_fraction) {
            return bad(format!(
                "hub cutoff fraction must lie in [0, 1), got {}",
                self.hub_cutoff_fraction
            ));
        }
        if self.max_iterations == 0 {
            return bad("max iterations must be at least 1".into());
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return bad(format!("tolerance must be positive, got {}", self.tolerance));
        }
        if !(0.0..1.0).contains(&self.relaxation) {
            return bad(format!(
                "relaxation must lie in [0, 1), got {}",
                self.relaxation
            ));
        }
        if !(self.axial_cap.is_finite() && self.axial_cap > 0.0) {
            return bad(format!("axial cap must be positive, got {}", self.axial_cap));
        }
        for (name, (lo, hi)) in [
            ("axial", self.axial_bounds),
            ("tangential", self.tangential_bounds),
        ] {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return bad(format!("{name} bounds must be ordered, got ({lo}, {hi})"));
            }
        }
        if self.axial_bounds.1 >= 1.0 {
            return bad("axial bound must stay below 1".into());
        }
        let (cl, cd) = self.fallback_coefficients;
        if !(cd.is_finite() && cl.is_finite()) {
            return bad("fallback coefficients must be finite".into());
        }
        if !(self.degenerate_tip_loss > 0.0 && self.degenerate_tip_loss <= 1.0) {
            return bad(format!(
                "degenerate tip loss must lie in (0, 1], got {}",
                self.degenerate_tip_loss
            ));
        }
        Ok(())
    }
}
