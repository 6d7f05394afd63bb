//! Calculation logic for the attendance engine.
//!
//! This module contains the pure functions behind attendance decisions:
//! geofence evaluation against work locations, teacher morning and evening
//! overtime, teacher work-hour computation, and child overtime in 15-minute
//! units. All time arithmetic works on timezone-naive wall-clock values.

use chrono::NaiveTime;

mod child_overtime;
mod geofence;
mod teacher_overtime;
mod work_hours;

pub use child_overtime::{
    DEFAULT_CHILD_EVENING_CUTOFF, DEFAULT_CHILD_MORNING_CUTOFF,
    DEFAULT_CHILD_OVERTIME_UNIT_MINUTES, calculate_child_evening_overtime,
    calculate_child_morning_overtime,
};
pub use geofence::{
    DEFAULT_FENCE_TOLERANCE_KM, EARTH_RADIUS_KM, NearestLocation, haversine_distance_km,
    is_within_any_location, nearest_location,
};
pub use teacher_overtime::{
    DEFAULT_DAY_END, DEFAULT_DAY_START, DEFAULT_OVERTIME_CAP_MINUTES, calculate_evening_overtime,
    calculate_morning_overtime, minute_of_day,
};
pub use work_hours::{WorkHoursResult, calculate_work_hours};

/// Builds a wall-clock time in a const context.
pub(crate) const fn wall_clock(hour: u32, minute: u32, second: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, second) {
        Some(time) => time,
        None => panic!("invalid wall-clock time"),
    }
}
