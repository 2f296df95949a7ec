//! Blade discretization.

use crate::error::{SolverError, SolverResult};
use rf_core::numeric::{ensure_all_finite, ensure_same_len, gradient};
use rf_core::units::{Area, Length, m};
use rf_core::AirfoilId;

/// One radial blade station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BladeStation {
    /// Radial position (m)
    pub r: f64,
    /// Chord length (m)
    pub chord: f64,
    /// Structural twist (degrees)
    pub twist_deg: f64,
    pub airfoil: AirfoilId,
}

/// Blade stations stored column-wise, ordered from root to tip.
///
/// The tip radius `R` is the largest station radius. Radial spacing for load
/// integration is precomputed with central differences.
#[derive(Clone, Debug, PartialEq)]
pub struct BladeGeometry {
    r: Vec<f64>,
    chord: Vec<f64>,
    twist_deg: Vec<f64>,
    airfoil: Vec<AirfoilId>,
    dr: Vec<f64>,
    tip_radius: f64,
}

impl BladeGeometry {
    /// Build a blade from parallel columns.
    ///
    /// # Errors
    /// Fails when the columns differ in length, there are fewer than two
    /// stations, any value is non-finite, a radius or chord is negative, or
    /// the radii decrease.
    pub fn new(
        r: Vec<f64>,
        chord: Vec<f64>,
        twist_deg: Vec<f64>,
        airfoil: Vec<AirfoilId>,
    ) -> SolverResult<Self> {
        ensure_same_len(r.len(), chord.len(), "chord")?;
        ensure_same_len(r.len(), twist_deg.len(), "twist")?;
        ensure_same_len(r.len(), airfoil.len(), "airfoil")?;
        if r.len() < 2 {
            return Err(SolverError::Geometry {
                what: format!("at least 2 stations are required, got {}", r.len()),
            });
        }
        ensure_all_finite(&r, "radius")?;
        ensure_all_finite(&chord, "chord")?;
        ensure_all_finite(&twist_deg, "twist")?;

        if let Some(i) = r.iter().position(|&v| v < 0.0) {
            return Err(SolverError::Geometry {
                what: format!("station {i} has negative radius {}", r[i]),
            });
        }
        if let Some(i) = chord.iter().position(|&v| v < 0.0) {
            return Err(SolverError::Geometry {
                what: format!("station {i} has negative chord {}", chord[i]),
            });
        }
        if let Some(i) = (1..r.len()).find(|&i| r[i] < r[i - 1]) {
            return Err(SolverError::Geometry {
                what: format!(
                    "radii must be non-decreasing, station {i} has r = {} after {}",
                    r[i],
                    r[i - 1]
                ),
            });
        }

        let tip_radius = r[r.len() - 1];
        if tip_radius <= 0.0 {
            return Err(SolverError::Geometry {
                what: "tip radius must be positive".into(),
            });
        }

        let dr = gradient(&r);
        Ok(Self {
            r,
            chord,
            twist_deg,
            airfoil,
            dr,
            tip_radius,
        })
    }

    /// Build a blade from station records.
    pub fn from_stations(stations: &[BladeStation]) -> SolverResult<Self> {
        Self::new(
            stations.iter().map(|s| s.r).collect(),
            stations.iter().map(|s| s.chord).collect(),
            stations.iter().map(|s| s.twist_deg).collect(),
            stations.iter().map(|s| s.airfoil).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    pub fn station(&self, i: usize) -> Option<BladeStation> {
        (i < self.len()).then(|| BladeStation {
            r: self.r[i],
            chord: self.chord[i],
            twist_deg: self.twist_deg[i],
            airfoil: self.airfoil[i],
        })
    }

    pub fn stations(&self) -> impl Iterator<Item = BladeStation> + '_ {
        (0..self.len()).filter_map(|i| self.station(i))
    }

    pub fn radii(&self) -> &[f64] {
        &self.r
    }

    pub fn chords(&self) -> &[f64] {
        &self.chord
    }

    pub fn twists_deg(&self) -> &[f64] {
        &self.twist_deg
    }

    pub fn airfoils(&self) -> &[AirfoilId] {
        &self.airfoil
    }

    /// Radial spacing used to integrate element loads (m).
    pub fn spacing(&self) -> &[f64] {
        &self.dr
    }

    /// Tip radius `R` in metres.
    pub fn tip_radius(&self) -> f64 {
        self.tip_radius
    }

    pub fn radius(&self) -> Length {
        m(self.tip_radius)
    }

    /// Rotor disk area `πR²`.
    pub fn swept_area(&self) -> Area {
        let r = self.radius();
        r * r * core::f64::consts::PI
    }

    /// Local solidity `B·c / (2πr)` at station `i`.
    #[inline]
    pub fn solidity(&self, i: usize, blade_count: u32) -> f64 {
        blade_count as f64 * self.chord[i] / (2.0 * core::f64::consts::PI * self.r[i])
    }
}
