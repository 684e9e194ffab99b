//! Planner configuration
use hifitime::{Duration, Unit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn default_startup_lead() -> Duration {
    15.0 * Unit::Minute
}

/// Angular unit used when rendering target coordinates.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    /// Radians (default)
    #[default]
    Radians,
    /// Decimal degrees
    Degrees,
}

impl AngleUnit {
    /// Converts an angle expressed in radians to Self.
    pub fn from_radians(&self, angle_rad: f64) -> f64 {
        match self {
            Self::Radians => angle_rad,
            Self::Degrees => angle_rad.to_degrees(),
        }
    }
}

/// Planner configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Time advance between the STARTUP command and the first observed
    /// bin, so the instrument is up when observation begins.
    #[cfg_attr(feature = "serde", serde(default = "default_startup_lead"))]
    pub startup_lead: Duration,
    /// Unit in which ra/dec are rendered in OBSERVING commands.
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle_unit: AngleUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            startup_lead: default_startup_lead(),
            angle_unit: AngleUnit::default(),
        }
    }
}
