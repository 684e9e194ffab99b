#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod catalog;
mod cfg;
mod command;
mod emitter;
mod error;
mod grid;
mod schedule;
mod scheduler;
mod visibility;
mod writer;

// pub export
pub use error::{InvalidInputError, MalformedScheduleError};


// prelude
pub mod prelude {
    pub use crate::catalog::Source;
    pub use crate::cfg::{AngleUnit, Config};
    pub use crate::emitter::Emitter;
    pub use crate::scheduler::quality_schedule;
    pub use crate::writer::{render_command, write_commands, write_schedule};
    // re-export
    pub use crate::command::{Command, CommandRecord};
    pub use crate::error::{InvalidInputError, MalformedScheduleError};
    pub use crate::grid::TimeGrid;
    pub use crate::schedule::{Availability, Schedule};
    pub use crate::visibility::VisibilityMatrix;
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
    pub use nalgebra::DMatrix;
}
