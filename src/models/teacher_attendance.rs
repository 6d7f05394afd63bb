//! Teacher attendance record and its lifecycle state.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A teacher's attendance for one calendar date.
///
/// Created on the first clock-in of the day and completed in place by the
/// matching clock-out. Overtime fields are in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherAttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The teacher this record belongs to.
    pub user_id: u64,
    /// The calendar date of the session.
    pub date: NaiveDate,
    /// When the teacher clocked in.
    pub clock_in: Option<NaiveDateTime>,
    /// When the teacher clocked out.
    pub clock_out: Option<NaiveDateTime>,
    /// Hours worked inside the regular day window, one decimal place.
    pub work_hours: Decimal,
    /// Reserved; not computed by the engine.
    pub overtime_regular: i64,
    /// Minutes of overtime before the day start.
    pub overtime_morning: i64,
    /// Minutes of overtime after the day end.
    pub overtime_evening: i64,
    /// Creation time, used to find the most recent record.
    pub created_at: NaiveDateTime,
}

impl TeacherAttendanceRecord {
    /// Creates an empty record for `date` with neither clock event set.
    ///
    /// Such placeholders may be created by processes outside the engine
    /// (e.g. a roster import) and are filled in by the next clock-in that
    /// happens on the same date.
    pub fn placeholder(user_id: u64, date: NaiveDate, created_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            clock_in: None,
            clock_out: None,
            work_hours: Decimal::new(0, 1),
            overtime_regular: 0,
            overtime_morning: 0,
            overtime_evening: 0,
            created_at,
        }
    }
}

/// The lifecycle state derived from a user's most recent attendance record.
///
/// # Example
///
/// ```
/// use daycare_attendance::models::AttendanceState;
///
/// let state = AttendanceState::from(None);
/// assert!(matches!(state, AttendanceState::NoRecord));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceState {
    /// The user has never clocked in.
    NoRecord,
    /// A record exists with neither clock-in nor clock-out.
    Pending(TeacherAttendanceRecord),
    /// A session is open.
    ClockedIn(TeacherAttendanceRecord),
    /// The last session is closed.
    ClockedOut(TeacherAttendanceRecord),
    /// The record has a clock-out but no clock-in; only reachable through
    /// external data corruption.
    Incomplete(TeacherAttendanceRecord),
}

impl AttendanceState {
    /// Returns a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AttendanceState::NoRecord => "no_record",
            AttendanceState::Pending(_) => "pending",
            AttendanceState::ClockedIn(_) => "clocked_in",
            AttendanceState::ClockedOut(_) => "clocked_out",
            AttendanceState::Incomplete(_) => "incomplete",
        }
    }
}

impl From<Option<TeacherAttendanceRecord>> for AttendanceState {
    fn from(latest: Option<TeacherAttendanceRecord>) -> Self {
        match latest {
            None => AttendanceState::NoRecord,
            Some(record) => match (record.clock_in, record.clock_out) {
                (None, None) => AttendanceState::Pending(record),
                (Some(_), None) => AttendanceState::ClockedIn(record),
                (Some(_), Some(_)) => AttendanceState::ClockedOut(record),
                (None, Some(_)) => AttendanceState::Incomplete(record),
            },
        }
    }
}
