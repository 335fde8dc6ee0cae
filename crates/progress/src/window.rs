//! Date-window helpers.
//!
//! Weeks start on Monday. All boundaries are midnight UTC.

use chrono::{Datelike, Duration, NaiveTime};
use stride_core::{ScheduleDay, Time};

/// Midnight of the calendar day containing `t`.
pub fn start_of_day(t: Time) -> Time {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Monday 00:00:00 of the week containing `t`.
pub fn start_of_week(t: Time) -> Time {
    let date = t.date_naive();
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    monday.and_time(NaiveTime::MIN).and_utc()
}

/// First calendar day of the month containing `t`, at 00:00:00.
pub fn start_of_month(t: Time) -> Time {
    let date = t.date_naive();
    let first = date - Duration::days(date.day0() as i64);
    first.and_time(NaiveTime::MIN).and_utc()
}

/// Count the calendar days in `[start, end]` whose weekday appears in
/// `scheduled_days`.
///
/// Days are compared by date, so a partial final day still counts. Returns 0
/// when the schedule is empty or the range is inverted.
pub fn count_scheduled_days_between(start: Time, end: Time, scheduled_days: &[ScheduleDay]) -> u32 {
    if scheduled_days.is_empty() || start > end {
        return 0;
    }

    let last = end.date_naive();
    start
        .date_naive()
        .iter_days()
        .take_while(|day| *day <= last)
        .filter(|day| scheduled_days.contains(&ScheduleDay::from(day.weekday())))
        .count() as u32
}
