//! Rotor performance studies built on repeated blade-element solves.
//!
//! - [`compute_performance_curve`]: power, thrust and torque over an
//!   operational schedule, with a pluggable rated-region correction.
//! - [`compute_coefficient_surface`]: `Cp`/`Ct` over a pitch × tip-speed-ratio
//!   grid at a reference wind speed.
//! - [`annual_energy`]: energy yield of a power curve under a Weibull climate.
//!
//! Operating points are independent, so both sweeps can fan out over rayon
//! workers; see [`Execution`].

pub mod aep;
pub mod correction;
pub mod curve;
pub mod error;
pub mod execution;
pub mod schedule;
pub mod surface;
pub mod sweeps;

pub use aep::{EnergyYield, WindDistribution, annual_energy, weibull_pdf};
pub use correction::{CurveCorrection, NoCorrection, RatedLimiter};
pub use curve::{PerformanceCurve, compute_performance_curve};
pub use error::{PerformanceError, PerformanceResult};
pub use execution::Execution;
pub use schedule::OperationalSchedule;
pub use surface::{
    CoefficientSurface, SurfacePeak, compute_coefficient_surface, rpm_for_tip_speed_ratio,
};
pub use sweeps::SweepDefinition;
