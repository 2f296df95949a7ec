//! Blade-element-momentum solver for wind-turbine rotors.
//!
//! For one operating point (wind speed, pitch, rotor speed) the solver finds
//! the axial and tangential induction factors at every blade station by a
//! relaxed fixed-point iteration with Prandtl tip loss, then integrates the
//! momentum-balance loads into rotor thrust, torque and power.
//!
//! Each call to [`solve`] only reads its inputs and owns its induction
//! arrays, so callers may run many solves in parallel.

pub mod config;
pub mod error;
pub mod geometry;
pub mod induction;
pub mod operating;
pub mod solve;

pub use config::{BemConfig, ConvergencePolicy};
pub use error::{SolverError, SolverResult};
pub use geometry::{BladeGeometry, BladeStation};
pub use induction::{Induction, StationStatus, prandtl_tip_loss};
pub use operating::OperatingPoint;
pub use solve::{BemSolution, ElementLoads, solve};
