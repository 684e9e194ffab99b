use nalgebra::DMatrix;

use crate::error::InvalidInputError;

/// Per source, per time bin quality scores.
///
/// One row per catalog source, one column per grid bin. A score of `0`
/// encodes "not observable at this bin"; anything above `0` is a directly
/// comparable quality, with elevation, environmental masking, moon
/// separation and per-source weight already folded in upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityMatrix {
    scores: DMatrix<f64>,
}

impl VisibilityMatrix {
    /// Validates and wraps externally computed scores. Every entry must
    /// be finite and non negative, and both dimensions non empty: a run
    /// with nothing to schedule is a usage error, not an empty schedule.
    pub fn new(scores: DMatrix<f64>) -> Result<Self, InvalidInputError> {
        if scores.nrows() == 0 {
            return Err(InvalidInputError::NoSources);
        }
        if scores.ncols() == 0 {
            return Err(InvalidInputError::NoTimeBins);
        }
        for i in 0..scores.nrows() {
            for t in 0..scores.ncols() {
                let value = scores[(i, t)];
                if !value.is_finite() {
                    return Err(InvalidInputError::NonFiniteScore { source_idx: i, bin: t });
                }
                if value < 0.0 {
                    return Err(InvalidInputError::NegativeScore {
                        source_idx: i,
                        bin: t,
                        value,
                    });
                }
            }
        }
        Ok(Self { scores })
    }

    /// Number of catalog sources (rows).
    pub fn num_sources(&self) -> usize {
        self.scores.nrows()
    }

    /// Number of time bins (columns).
    pub fn num_bins(&self) -> usize {
        self.scores.ncols()
    }

    /// Quality score of source `i` at bin `t`.
    pub fn score(&self, i: usize, t: usize) -> f64 {
        self.scores[(i, t)]
    }

    /// Raw score matrix.
    pub fn scores(&self) -> &DMatrix<f64> {
        &self.scores
    }
}
