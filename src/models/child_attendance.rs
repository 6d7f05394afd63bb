//! Child attendance record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One arrival event of a child on a calendar date.
///
/// Overtime is counted in whole overtime units (15-minute blocks by default),
/// not in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildAttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The child this record belongs to.
    pub child_id: u64,
    /// The calendar date of attendance.
    pub date: NaiveDate,
    /// When the child arrived.
    pub arrival: NaiveDateTime,
    /// When the child left, if recorded.
    pub departure: Option<NaiveDateTime>,
    /// Overtime units before the morning cutoff.
    pub overtime_morning: i64,
    /// Overtime units after the evening cutoff.
    pub overtime_evening: i64,
}
