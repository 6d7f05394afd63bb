//! Work-hour calculation for a closed teacher session.
//!
//! Only time inside the regular day window counts: the start is clamped up to
//! the day start and the end is clamped down to the day end. The result is
//! truncated toward zero to one decimal place.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::teacher_overtime::minute_of_day;

/// The breakdown of a work-hour calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHoursResult {
    /// Effective start, as minute of day.
    pub start_minute: i64,
    /// Effective end, as minute of day.
    pub end_minute: i64,
    /// Hours worked, one decimal place, truncated toward zero.
    pub work_hours: Decimal,
}

/// Calculates hours worked between `clock_in` and `clock_out` inside the day window.
///
/// `start = max(day_start, clock_in)`, `end = min(day_end, clock_out)`,
/// `work_hours = trunc((end − start) × 10) / 10`. A clock-out before the
/// clock-in is not rejected and yields a negative value.
///
/// # Examples
///
/// ```
/// use daycare_attendance::calculation::{calculate_work_hours, DEFAULT_DAY_END, DEFAULT_DAY_START};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let clock_in = NaiveDateTime::parse_from_str("2025-02-20 06:40:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let clock_out = NaiveDateTime::parse_from_str("2025-02-20 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = calculate_work_hours(clock_in, clock_out, DEFAULT_DAY_START, DEFAULT_DAY_END);
/// assert_eq!(result.work_hours, Decimal::new(80, 1)); // 8.0
/// ```
pub fn calculate_work_hours(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    day_start: NaiveTime,
    day_end: NaiveTime,
) -> WorkHoursResult {
    let start_minute = minute_of_day(&clock_in).max(minute_of_day(&day_start));
    let end_minute = minute_of_day(&clock_out).min(minute_of_day(&day_end));

    // (minutes / 60) × 10 truncated == minutes / 6 with truncating division.
    let tenths = (end_minute - start_minute) / 6;

    WorkHoursResult {
        start_minute,
        end_minute,
        work_hours: Decimal::new(tenths, 1),
    }
}
