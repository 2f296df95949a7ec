//! Airfoil id to polar mapping.

use crate::polar::AirfoilPolar;
use rf_core::AirfoilId;
use std::collections::BTreeMap;

/// Polar tables keyed by airfoil id.
///
/// Loaded once per run and only read afterwards; the solver shares it across
/// rayon workers by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarDatabase {
    polars: BTreeMap<AirfoilId, AirfoilPolar>,
}

impl PolarDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a polar, returning the one it replaced.
    pub fn insert(&mut self, id: AirfoilId, polar: AirfoilPolar) -> Option<AirfoilPolar> {
        self.polars.insert(id, polar)
    }

    pub fn get(&self, id: AirfoilId) -> Option<&AirfoilPolar> {
        self.polars.get(&id)
    }

    pub fn contains(&self, id: AirfoilId) -> bool {
        self.polars.contains_key(&id)
    }

    /// Interpolated `(cl, cd)` for airfoil `id`, or `None` if it has no polar.
    #[inline]
    pub fn coefficients(&self, id: AirfoilId, alpha_deg: f64) -> Option<(f64, f64)> {
        self.polars.get(&id).map(|p| p.coefficients(alpha_deg))
    }

    pub fn len(&self) -> usize {
        self.polars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polars.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = AirfoilId> + '_ {
        self.polars.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AirfoilId, &AirfoilPolar)> {
        self.polars.iter().map(|(id, p)| (*id, p))
    }
}

impl FromIterator<(AirfoilId, AirfoilPolar)> for PolarDatabase {
    fn from_iter<I: IntoIterator<Item = (AirfoilId, AirfoilPolar)>>(iter: I) -> Self {
        Self {
            polars: iter.into_iter().collect(),
        }
    }
}
