//! Planner error types
use hifitime::Duration;
use thiserror::Error;

/// Malformed or out of domain numeric input. The planner rejects the
/// whole run rather than producing a silently empty schedule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("visibility matrix has no sources")]
    NoSources,
    #[error("visibility matrix has no time bins")]
    NoTimeBins,
    #[error("negative quality score {value} for source #{source_idx} at bin {bin}")]
    NegativeScore {
        source_idx: usize,
        bin: usize,
        value: f64,
    },
    #[error("non finite quality score for source #{source_idx} at bin {bin}")]
    NonFiniteScore { source_idx: usize, bin: usize },
    #[error("time grid needs at least two samples, got {len}")]
    TimeGridTooShort { len: usize },
    #[error("time grid must be strictly increasing (sample #{index})")]
    NonMonotonicTimeGrid { index: usize },
    #[error("time step must be strictly positive, got {step}")]
    NonPositiveStep { step: Duration },
}

/// Structural mismatch between the schedule matrix, the source catalog
/// and the time grid. Emission aborts before any record is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedScheduleError {
    #[error("schedule holds {schedule} sources but the catalog holds {catalog}")]
    SourceCountMismatch { schedule: usize, catalog: usize },
    #[error("schedule holds {schedule} bins but the time grid holds {grid}")]
    TimeBinMismatch { schedule: usize, grid: usize },
}
