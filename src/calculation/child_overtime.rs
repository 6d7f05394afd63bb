//! Child overtime calculation.
//!
//! Children are billed overtime in whole units (15-minute blocks by default):
//! any started block counts. Unlike teacher overtime, this is computed from
//! the exact elapsed time against a cutoff on the same date, and is zero when
//! the event is not strictly outside the cutoff.

use chrono::{NaiveDateTime, NaiveTime};

use super::wall_clock;

/// Default morning cutoff for children (07:45:00).
pub const DEFAULT_CHILD_MORNING_CUTOFF: NaiveTime = wall_clock(7, 45, 0);

/// Default evening cutoff for children (16:15:00).
pub const DEFAULT_CHILD_EVENING_CUTOFF: NaiveTime = wall_clock(16, 15, 0);

/// Default length of one child overtime unit, in minutes.
pub const DEFAULT_CHILD_OVERTIME_UNIT_MINUTES: i64 = 15;

/// Counts started units in `minutes`: `(minutes + unit − 1) / unit`.
fn started_units(minutes: i64, unit_minutes: i64) -> i64 {
    if unit_minutes <= 0 {
        return 0;
    }
    (minutes + unit_minutes - 1) / unit_minutes
}

/// Calculates morning overtime units for a child arriving at `arrival`.
///
/// Whole minutes before the cutoff are counted (partial minutes are dropped),
/// then rounded up to units.
///
/// # Examples
///
/// ```
/// use daycare_attendance::calculation::{
///     calculate_child_morning_overtime, DEFAULT_CHILD_MORNING_CUTOFF,
///     DEFAULT_CHILD_OVERTIME_UNIT_MINUTES,
/// };
/// use chrono::NaiveDateTime;
///
/// let arrival = NaiveDateTime::parse_from_str("2025-02-20 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let units = calculate_child_morning_overtime(
///     arrival,
///     DEFAULT_CHILD_MORNING_CUTOFF,
///     DEFAULT_CHILD_OVERTIME_UNIT_MINUTES,
/// );
/// assert_eq!(units, 1);
/// ```
pub fn calculate_child_morning_overtime(arrival: NaiveDateTime, cutoff: NaiveTime, unit_minutes: i64) -> i64 {
    let cutoff = arrival.date().and_time(cutoff);
    if arrival < cutoff {
        started_units((cutoff - arrival).num_minutes(), unit_minutes)
    } else {
        0
    }
}

/// Calculates evening overtime units for a child leaving at `departure`.
pub fn calculate_child_evening_overtime(departure: NaiveDateTime, cutoff: NaiveTime, unit_minutes: i64) -> i64 {
    let cutoff = departure.date().and_time(cutoff);
    if departure > cutoff {
        started_units((departure - cutoff).num_minutes(), unit_minutes)
    } else {
        0
    }
}
