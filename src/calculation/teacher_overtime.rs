//! Teacher overtime calculation.
//!
//! Morning overtime counts the minutes between a clock-in and the start of
//! the regular day; evening overtime counts the minutes between the end of
//! the regular day and a clock-out. Both are capped above and are NOT floored
//! at zero: a clock-in after the day start yields a negative morning value.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use super::wall_clock;

/// Default start of the regular teaching day (08:00).
pub const DEFAULT_DAY_START: NaiveTime = wall_clock(8, 0, 0);

/// Default end of the regular teaching day (16:00).
pub const DEFAULT_DAY_END: NaiveTime = wall_clock(16, 0, 0);

/// Default cap on morning and evening overtime, in minutes.
pub const DEFAULT_OVERTIME_CAP_MINUTES: i64 = 60;

/// Returns the wall-clock minute of the day (`hour·60 + minute`), ignoring seconds.
pub fn minute_of_day<T: Timelike>(time: &T) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Calculates morning overtime minutes for a clock-in.
///
/// `overtime = min(day_start − clock_in, cap)` on wall-clock minutes.
///
/// # Examples
///
/// ```
/// use daycare_attendance::calculation::{
///     calculate_morning_overtime, DEFAULT_DAY_START, DEFAULT_OVERTIME_CAP_MINUTES,
/// };
/// use chrono::NaiveDateTime;
///
/// let clock_in = NaiveDateTime::parse_from_str("2025-02-20 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(calculate_morning_overtime(clock_in, DEFAULT_DAY_START, DEFAULT_OVERTIME_CAP_MINUTES), 30);
///
/// let early = NaiveDateTime::parse_from_str("2025-02-20 06:40:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(calculate_morning_overtime(early, DEFAULT_DAY_START, DEFAULT_OVERTIME_CAP_MINUTES), 60);
/// ```
pub fn calculate_morning_overtime(clock_in: NaiveDateTime, day_start: NaiveTime, cap_minutes: i64) -> i64 {
    (minute_of_day(&day_start) - minute_of_day(&clock_in)).min(cap_minutes)
}

/// Calculates evening overtime minutes for a clock-out.
///
/// `overtime = min(clock_out − day_end, cap)` on wall-clock minutes.
///
/// # Examples
///
/// ```
/// use daycare_attendance::calculation::{
///     calculate_evening_overtime, DEFAULT_DAY_END, DEFAULT_OVERTIME_CAP_MINUTES,
/// };
/// use chrono::NaiveDateTime;
///
/// let clock_out = NaiveDateTime::parse_from_str("2025-02-20 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(calculate_evening_overtime(clock_out, DEFAULT_DAY_END, DEFAULT_OVERTIME_CAP_MINUTES), 30);
/// ```
pub fn calculate_evening_overtime(clock_out: NaiveDateTime, day_end: NaiveTime, cap_minutes: i64) -> i64 {
    (minute_of_day(&clock_out) - minute_of_day(&day_end)).min(cap_minutes)
}
