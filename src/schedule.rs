//! Night schedule and per bin availability
use nalgebra::DMatrix;

/// Peak quality per time bin: the column maxima of the visibility
/// matrix the schedule was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    best: Vec<f64>,
}

impl Availability {
    pub(crate) fn new(best: Vec<f64>) -> Self {
        Self { best }
    }

    /// Number of time bins.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Peak quality score at bin `t`.
    pub fn best(&self, t: usize) -> f64 {
        self.best[t]
    }

    /// True if at least one source is observable at bin `t`.
    pub fn available(&self, t: usize) -> bool {
        self.best[t] > 0.0
    }
}

/// Boolean source assignment, same shape as the visibility matrix.
///
/// A column may hold several `true` flags when scores tie exactly; an
/// all false column is an idle bin. Derived once per run, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    flags: DMatrix<bool>,
}

impl Schedule {
    pub(crate) fn from_flags(flags: DMatrix<bool>) -> Self {
        Self { flags }
    }

    /// Number of catalog sources (rows).
    pub fn num_sources(&self) -> usize {
        self.flags.nrows()
    }

    /// Number of time bins (columns).
    pub fn num_bins(&self) -> usize {
        self.flags.ncols()
    }

    /// Target pointed at during bin `t`, or `None` for an idle bin.
    ///
    /// When several sources tie at the column maximum, the lowest
    /// catalog index wins. This is the one place that convention lives;
    /// consumers must locate the target through this method rather than
    /// re-reading the boolean column.
    pub fn selected(&self, t: usize) -> Option<usize> {
        self.flags.column(t).iter().position(|flag| *flag)
    }

    /// True if nothing is scheduled at bin `t`.
    pub fn is_idle(&self, t: usize) -> bool {
        self.selected(t).is_none()
    }

    /// Raw assignment flags.
    pub fn flags(&self) -> &DMatrix<bool> {
        &self.flags
    }
}
