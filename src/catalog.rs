#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observable target, as read from the observation catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Source {
    /// Target name, unique within one run
    pub name: String,
    /// Right ascension (ICRS) [rad]
    pub ra_rad: f64,
    /// Declination (ICRS) [rad]
    pub dec_rad: f64,
    /// Priority multiplier, already folded into the quality scores upstream
    pub weight: f64,
}

impl Source {
    /// Builds a new [Source] from its catalog record.
    /// Coordinates are expressed in radians regardless of the unit the
    /// schedule file will eventually be rendered in.
    pub fn new(name: &str, ra_rad: f64, dec_rad: f64, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            ra_rad,
            dec_rad,
            weight,
        }
    }
}
