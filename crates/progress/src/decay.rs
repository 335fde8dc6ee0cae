//! Recent-activity decay score.

use chrono::Duration;
use tracing::trace;

use stride_core::{CompletionRecord, Time};

use crate::calculator::clamp_fraction;
use crate::window::start_of_day;

/// Length of the trailing window, and the fixed baseline of expected
/// completions over it (one per day). The baseline is a deliberate
/// simplification; it is not derived from each objective's scheduled
/// frequency.
pub const DECAY_WINDOW_DAYS: i64 = 7;

/// Compute a normalized adherence score over the trailing 7-day window.
///
/// The lower bound is `now - 7 days` with its time of day kept; the upper
/// bound is midnight of `now`'s day. Downstream indicators depend on these
/// exact bounds, asymmetric as they are.
pub fn compute_decay(completions: &[CompletionRecord], now: Time) -> f64 {
    let lower = now - Duration::days(DECAY_WINDOW_DAYS);
    let upper = start_of_day(now);

    let recent = completions
        .iter()
        .filter(|c| c.completed_at >= lower && c.completed_at <= upper)
        .count();

    let score = clamp_fraction(recent as f64 / DECAY_WINDOW_DAYS as f64);
    trace!(recent, score, "computed decay");
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stride_core::{CompletionRecord, ObjectiveId};

    fn completion_at(y: i32, m: u32, d: u32, h: u32) -> CompletionRecord {
        CompletionRecord::new(
            ObjectiveId::new(),
            Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        )
    }

    fn now() -> Time {
        Utc.with_ymd_and_hms(2024, 3, 14, 15, 0, 0).unwrap()
    }

    #[test]
    fn three_recent_completions_score_three_sevenths() {
        let completions = vec![
            completion_at(2024, 3, 9, 10),
            completion_at(2024, 3, 11, 20),
            completion_at(2024, 3, 13, 7),
        ];
        let score = compute_decay(&completions, now());
        assert!((score - 3.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_history_scores_zero() {
        assert_eq!(compute_decay(&[], now()), 0.0);
    }

    #[test]
    fn score_clamps_at_one() {
        // Two completions per day over the in-window days: 12 against a
        // baseline of 7
        let completions: Vec<_> = (8..=13)
            .flat_map(|d| [completion_at(2024, 3, d, 6), completion_at(2024, 3, d, 19)])
            .collect();
        assert_eq!(compute_decay(&completions, now()), 1.0);
    }

    #[test]
    fn lower_bound_keeps_time_of_day() {
        // now - 7d = 2024-03-07 15:00; a completion earlier that day is out,
        // one later that day is in
        let completions = vec![completion_at(2024, 3, 7, 9)];
        assert_eq!(compute_decay(&completions, now()), 0.0);

        let completions = vec![completion_at(2024, 3, 7, 18)];
        assert!((compute_decay(&completions, now()) - 1.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn upper_bound_is_midnight_of_today() {
        // A completion earlier today (after midnight) falls outside the window
        let completions = vec![completion_at(2024, 3, 14, 9)];
        assert_eq!(compute_decay(&completions, now()), 0.0);

        // Midnight itself is included
        let completions = vec![completion_at(2024, 3, 14, 0)];
        assert!((compute_decay(&completions, now()) - 1.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let completions = vec![completion_at(2024, 3, 10, 12)];
        assert_eq!(
            compute_decay(&completions, now()),
            compute_decay(&completions, now())
        );
    }
}
