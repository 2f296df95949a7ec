//! rf-airfoils: airfoil polar tables for rotorflow.
//!
//! Provides:
//! - `AirfoilPolar`: a validated (alpha, Cl, Cd) table sorted by angle of attack
//! - `interpolate_coefficients`: piecewise-linear lookup with flat extrapolation
//! - `PolarDatabase`: airfoil id to polar mapping read by the element solver
//!
//! # Example
//!
//! ```
//! use rf_airfoils::{AirfoilPolar, PolarDatabase};
//! use rf_core::AirfoilId;
//!
//! let polar = AirfoilPolar::new(
//!     vec![-10.0, 0.0, 10.0],
//!     vec![-0.7, 0.3, 1.3],
//!     vec![0.02, 0.008, 0.02],
//! )
//! .unwrap();
//!
//! let mut db = PolarDatabase::new();
//! db.insert(AirfoilId::new(1), polar);
//!
//! let (cl, cd) = db.coefficients(AirfoilId::new(1), 5.0).unwrap();
//! assert!((cl - 0.8).abs() < 1e-12);
//! assert!((cd - 0.014).abs() < 1e-12);
//! ```

pub mod database;
pub mod error;
pub mod interpolate;
pub mod polar;

pub use database::PolarDatabase;
pub use error::{AirfoilError, AirfoilResult};
pub use interpolate::interpolate_coefficients;
pub use polar::AirfoilPolar;
