use hifitime::{Duration, Epoch};
use itertools::Itertools;

use crate::error::InvalidInputError;

/// Discrete time grid spanning one observing night.
///
/// Samples are absolute timestamps, strictly increasing, evenly spaced
/// except possibly at the boundaries of the night window. The grid is
/// shared by construction across all sources of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    epochs: Vec<Epoch>,
}

impl TimeGrid {
    /// Builds a grid from externally computed night samples.
    /// At least two samples are required: the closing bin width is read
    /// off the spacing of the last two entries.
    pub fn new(epochs: Vec<Epoch>) -> Result<Self, InvalidInputError> {
        if epochs.len() < 2 {
            return Err(InvalidInputError::TimeGridTooShort { len: epochs.len() });
        }
        if let Some((index, _)) = epochs
            .iter()
            .tuple_windows()
            .find_position(|(prev, next)| next <= prev)
        {
            return Err(InvalidInputError::NonMonotonicTimeGrid { index: index + 1 });
        }
        Ok(Self { epochs })
    }

    /// Builds a uniformly sampled grid covering [start, stop] with the
    /// given step. The last sample is the latest one not past `stop`.
    pub fn sampled(start: Epoch, stop: Epoch, step: Duration) -> Result<Self, InvalidInputError> {
        if step <= Duration::ZERO {
            return Err(InvalidInputError::NonPositiveStep { step });
        }
        let mut epochs = Vec::new();
        let mut t = start;
        while t <= stop {
            epochs.push(t);
            t += step;
        }
        Self::new(epochs)
    }

    /// Number of time bins.
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    /// Timestamp of bin `t`.
    pub fn epoch(&self, t: usize) -> Epoch {
        self.epochs[t]
    }

    /// Iterates bin timestamps in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &Epoch> {
        self.epochs.iter()
    }

    /// Bin width, read off the spacing of the last two samples.
    pub fn bin_width(&self) -> Duration {
        let n = self.epochs.len();
        self.epochs[n - 1] - self.epochs[n - 2]
    }

    /// One bin width past the last sample: where the closing SHUTDOWN
    /// of a night goes.
    pub fn closing_epoch(&self) -> Epoch {
        self.epochs[self.epochs.len() - 1] + self.bin_width()
    }
}
