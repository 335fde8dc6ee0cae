//! Completion-fraction calculator.

use tracing::trace;

use stride_core::{Category, CompletionRecord, ProgressionMode, Time};

use crate::window::{count_scheduled_days_between, start_of_month, start_of_week};

/// Compute a category's completion fraction in `[0, 1]`.
///
/// Every degenerate input (missing or zero target, empty schedule, no
/// completions) maps to 0 rather than an error: indicators must always have
/// a number to render.
pub fn compute_progress(
    mode: ProgressionMode,
    category: &Category,
    completions: &[CompletionRecord],
    now: Time,
) -> f64 {
    let fraction = match mode {
        ProgressionMode::Cumulative => cumulative_progress(category),
        ProgressionMode::Weekly => weekly_progress(category, completions, now),
        ProgressionMode::Monthly => monthly_progress(category, completions, now),
    };
    trace!(category = %category.id, %mode, fraction, "computed progress");
    fraction
}

fn cumulative_progress(category: &Category) -> f64 {
    match category.target_value {
        Some(target) if target != 0.0 => {
            clamp_fraction(category.current_value.unwrap_or(0.0) / target)
        }
        _ => 0.0,
    }
}

fn weekly_progress(category: &Category, completions: &[CompletionRecord], now: Time) -> f64 {
    let week_start = start_of_week(now);
    let expected = count_scheduled_days_between(week_start, now, &category.scheduled_days);
    if expected == 0 {
        return 0.0;
    }

    let actual = completions
        .iter()
        .filter(|c| c.completed_at >= week_start && c.completed_at <= now)
        .count();

    clamp_fraction(actual as f64 / expected as f64)
}

fn monthly_progress(category: &Category, completions: &[CompletionRecord], now: Time) -> f64 {
    let month_start = start_of_month(now);
    let total: f64 = completions
        .iter()
        .filter(|c| c.completed_at >= month_start && c.completed_at <= now)
        .map(|c| c.value.unwrap_or(0.0))
        .sum();

    match category.monthly_target_value {
        Some(target) if target != 0.0 => clamp_fraction(total / target),
        _ => 0.0,
    }
}

pub(crate) fn clamp_fraction(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stride_core::ObjectiveId;
    use stride_core::ScheduleDay;

    fn category(mode: ProgressionMode) -> Category {
        Category::new("Test", mode)
    }

    fn completion_at(y: i32, m: u32, d: u32, h: u32) -> CompletionRecord {
        CompletionRecord::new(
            ObjectiveId::new(),
            Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        )
    }

    // Thursday afternoon
    fn now() -> Time {
        Utc.with_ymd_and_hms(2024, 3, 14, 15, 0, 0).unwrap()
    }

    #[test]
    fn cumulative_is_ratio_of_current_over_target() {
        let mut cat = category(ProgressionMode::Cumulative);
        cat.target_value = Some(200.0);
        cat.current_value = Some(50.0);

        let p = compute_progress(ProgressionMode::Cumulative, &cat, &[], now());
        assert!((p - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn cumulative_without_target_is_zero() {
        let mut cat = category(ProgressionMode::Cumulative);
        cat.current_value = Some(50.0);
        assert_eq!(compute_progress(ProgressionMode::Cumulative, &cat, &[], now()), 0.0);

        cat.target_value = Some(0.0);
        assert_eq!(compute_progress(ProgressionMode::Cumulative, &cat, &[], now()), 0.0);
    }

    #[test]
    fn cumulative_clamps_overshoot_and_negatives() {
        let mut cat = category(ProgressionMode::Cumulative);
        cat.target_value = Some(100.0);

        cat.current_value = Some(250.0);
        assert_eq!(compute_progress(ProgressionMode::Cumulative, &cat, &[], now()), 1.0);

        cat.current_value = Some(-40.0);
        assert_eq!(compute_progress(ProgressionMode::Cumulative, &cat, &[], now()), 0.0);
    }

    #[test]
    fn weekly_counts_completions_against_elapsed_scheduled_days() {
        let mut cat = category(ProgressionMode::Weekly);
        // Monday + Wednesday elapsed by Thursday, Friday not yet
        cat.scheduled_days = vec![
            ScheduleDay::Monday,
            ScheduleDay::Wednesday,
            ScheduleDay::Friday,
        ];

        // One completion on Monday of the current week
        let completions = vec![completion_at(2024, 3, 11, 9)];
        let p = compute_progress(ProgressionMode::Weekly, &cat, &completions, now());
        assert!((p - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn weekly_without_elapsed_scheduled_days_is_zero() {
        let mut cat = category(ProgressionMode::Weekly);
        // Thursday "now": no Friday has elapsed this week yet
        cat.scheduled_days = vec![ScheduleDay::Friday];

        let completions = vec![completion_at(2024, 3, 11, 9)];
        assert_eq!(
            compute_progress(ProgressionMode::Weekly, &cat, &completions, now()),
            0.0
        );

        // Empty schedule behaves the same
        cat.scheduled_days.clear();
        assert_eq!(
            compute_progress(ProgressionMode::Weekly, &cat, &completions, now()),
            0.0
        );
    }

    #[test]
    fn weekly_ignores_completions_outside_current_week() {
        let mut cat = category(ProgressionMode::Weekly);
        cat.scheduled_days = vec![ScheduleDay::Monday];

        // Previous week's Monday, and a future timestamp
        let completions = vec![completion_at(2024, 3, 4, 9), completion_at(2024, 3, 15, 9)];
        assert_eq!(
            compute_progress(ProgressionMode::Weekly, &cat, &completions, now()),
            0.0
        );
    }

    #[test]
    fn weekly_clamps_at_full_adherence() {
        let mut cat = category(ProgressionMode::Weekly);
        cat.scheduled_days = vec![ScheduleDay::Monday];

        // Two completions against one expected day
        let completions = vec![completion_at(2024, 3, 11, 9), completion_at(2024, 3, 12, 9)];
        assert_eq!(
            compute_progress(ProgressionMode::Weekly, &cat, &completions, now()),
            1.0
        );
    }

    #[test]
    fn monthly_sums_values_with_missing_treated_as_zero() {
        let mut cat = category(ProgressionMode::Monthly);
        cat.monthly_target_value = Some(40.0);

        let completions = vec![
            completion_at(2024, 3, 2, 9).with_value(5.0),
            completion_at(2024, 3, 5, 9),
            completion_at(2024, 3, 10, 9).with_value(15.0),
        ];
        let p = compute_progress(ProgressionMode::Monthly, &cat, &completions, now());
        assert!((p - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn monthly_ignores_records_outside_month_window() {
        let mut cat = category(ProgressionMode::Monthly);
        cat.monthly_target_value = Some(40.0);

        let completions = vec![
            completion_at(2024, 2, 28, 9).with_value(20.0),
            completion_at(2024, 3, 20, 9).with_value(20.0),
        ];
        assert_eq!(
            compute_progress(ProgressionMode::Monthly, &cat, &completions, now()),
            0.0
        );
    }

    #[test]
    fn monthly_without_target_is_zero() {
        let cat = category(ProgressionMode::Monthly);
        let completions = vec![completion_at(2024, 3, 2, 9).with_value(100.0)];
        assert_eq!(
            compute_progress(ProgressionMode::Monthly, &cat, &completions, now()),
            0.0
        );
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let mut cat = category(ProgressionMode::Monthly);
        cat.monthly_target_value = Some(10.0);
        let completions = vec![completion_at(2024, 3, 2, 9).with_value(3.0)];

        let a = compute_progress(ProgressionMode::Monthly, &cat, &completions, now());
        let b = compute_progress(ProgressionMode::Monthly, &cat, &completions, now());
        assert_eq!(a, b);
    }
}
