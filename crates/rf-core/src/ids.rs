use core::fmt;

/// Identifier of an airfoil section, the key of the polar database.
///
/// Blade station tables reference airfoils by this integer. The value is
/// opaque to the solver; it only has to match a database entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirfoilId(u32);

impl AirfoilId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for AirfoilId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for AirfoilId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirfoilId({})", self.0)
    }
}

impl fmt::Display for AirfoilId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
