use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Instrument control command.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Power the instrument up.
    Startup,
    /// Point at, and stay on, the named target.
    Observing {
        /// Target name, copied from the catalog
        source: String,
        /// Right ascension [rad]
        ra_rad: f64,
        /// Declination [rad]
        dec_rad: f64,
    },
    /// Power the instrument down.
    Shutdown,
}

/// One timestamped command, as handed to the serializer.
/// Records own their target identity: the stream outlives the catalog
/// it was derived from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandRecord {
    /// Execution instant
    pub epoch: Epoch,
    /// Command to execute
    pub command: Command,
}

impl CommandRecord {
    pub(crate) fn new(epoch: Epoch, command: Command) -> Self {
        Self { epoch, command }
    }
}
