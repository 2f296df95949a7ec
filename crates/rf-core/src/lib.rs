//! rf-core: stable foundation for rotorflow.
//!
//! Contains:
//! - units (uom SI types + constructors for rotor quantities)
//! - numeric (Real + tolerances + float and array helpers)
//! - ids (airfoil identifiers used as polar database keys)
//! - timing (opt-in solver timing counters)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RfError, RfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
