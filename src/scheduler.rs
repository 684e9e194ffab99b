//! Per bin assignment engine
use log::info;
use nalgebra::DMatrix;

use crate::schedule::{Availability, Schedule};
use crate::visibility::VisibilityMatrix;

/// Derives the night schedule from a quality score matrix.
///
/// Each time bin is resolved independently: the bin goes to the source(s)
/// holding the highest score of its column, or stays idle when every score
/// is `0`. Scores are compared exactly, with no epsilon: sources tying at
/// the maximum are all flagged, and the tie is broken at read time by
/// [Schedule::selected] (lowest catalog index).
///
/// The per bin maximization is deliberately memoryless: no lookahead, no
/// smoothing, no minimum dwell time. The scores already fold in priority
/// weighting and every observability constraint, so the greedy choice is
/// optimal bin by bin; what it does not minimize is the number of target
/// switches across the night.
pub fn quality_schedule(visibility: &VisibilityMatrix) -> (Availability, Schedule) {
    let (num_sources, num_bins) = (visibility.num_sources(), visibility.num_bins());
    let scores = visibility.scores();

    let best: Vec<f64> = (0..num_bins)
        .map(|t| scores.column(t).iter().fold(0.0_f64, |acc, v| acc.max(*v)))
        .collect();

    let flags = DMatrix::from_fn(num_sources, num_bins, |i, t| {
        best[t] > 0.0 && scores[(i, t)] == best[t]
    });

    let idle_bins = best.iter().filter(|b| **b == 0.0).count();
    info!(
        "{} sources over {} bins - {} idle",
        num_sources, num_bins, idle_bins
    );

    (Availability::new(best), Schedule::from_flags(flags))
}

#[cfg(test)]
mod test {
    use super::*;

    fn visibility(rows: usize, cols: usize, scores: &[f64]) -> VisibilityMatrix {
        VisibilityMatrix::new(DMatrix::from_row_slice(rows, cols, scores)).unwrap()
    }

    #[test]
    fn per_bin_argmax() {
        let visibility = visibility(2, 4, &[0.0, 5.0, 5.0, 0.0, 0.0, 0.0, 3.0, 0.0]);
        let (availability, schedule) = quality_schedule(&visibility);

        assert_eq!(schedule.selected(0), None);
        assert_eq!(schedule.selected(1), Some(0));
        assert_eq!(schedule.selected(2), Some(0));
        assert_eq!(schedule.selected(3), None);

        assert!(!availability.available(0));
        assert!(availability.available(1));
        assert!(availability.available(2));
        assert!(!availability.available(3));
        assert_eq!(availability.best(2), 5.0);
    }

    #[test]
    fn exact_ties_flag_every_winner() {
        let visibility = visibility(3, 1, &[4.0, 4.0, 1.0]);
        let (_, schedule) = quality_schedule(&visibility);

        assert!(schedule.flags()[(0, 0)]);
        assert!(schedule.flags()[(1, 0)]);
        assert!(!schedule.flags()[(2, 0)]);
        // downstream convention: lowest index wins
        assert_eq!(schedule.selected(0), Some(0));
    }

    #[test]
    fn idle_columns_match_zero_scores() {
        let visibility = visibility(2, 3, &[0.0, 0.0, 2.0, 0.0, 0.0, 0.5]);
        let (availability, schedule) = quality_schedule(&visibility);

        for t in 0..3 {
            assert_eq!(availability.available(t), !schedule.is_idle(t));
        }
        assert_eq!(availability.len(), 3);
        assert_eq!(schedule.selected(2), Some(0));
    }

    #[test]
    fn selection_is_optimal_per_bin() {
        let visibility = visibility(3, 3, &[1.0, 0.2, 0.0, 3.0, 0.1, 0.0, 2.0, 0.3, 0.0]);
        let (availability, schedule) = quality_schedule(&visibility);

        for t in 0..visibility.num_bins() {
            if let Some(selected) = schedule.selected(t) {
                let best = (0..visibility.num_sources())
                    .map(|i| visibility.score(i, t))
                    .fold(0.0_f64, f64::max);
                assert_eq!(visibility.score(selected, t), best);
                assert_eq!(availability.best(t), best);
            }
        }
    }
}
