//! Transition rules for teacher attendance.
//!
//! ```text
//! NoRecord ──clock_in──▶ ClockedIn ──clock_out──▶ ClockedOut ──clock_in──▶ ClockedIn (new record)
//! Pending (same date) ──clock_in──▶ ClockedIn (same record)
//! Incomplete ──▶ rejected both ways
//! ```
//!
//! Transitions are pure: they take the state derived from the most recent
//! record and return the record to persist. Geofence checks and I/O happen
//! in [`TeacherAttendanceService`](super::TeacherAttendanceService).

use chrono::NaiveDateTime;

use crate::config::AttendancePolicy;
use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{AttendanceState, TeacherAttendanceRecord};

/// The record produced by a clock-in, and whether it is new.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockOutcome {
    /// A new record was created.
    Created(TeacherAttendanceRecord),
    /// An existing record was filled in.
    Updated(TeacherAttendanceRecord),
}

impl ClockOutcome {
    /// Returns the record regardless of outcome.
    pub fn record(&self) -> &TeacherAttendanceRecord {
        match self {
            ClockOutcome::Created(record) | ClockOutcome::Updated(record) => record,
        }
    }

    /// Consumes the outcome and returns the record.
    pub fn into_record(self) -> TeacherAttendanceRecord {
        match self {
            ClockOutcome::Created(record) | ClockOutcome::Updated(record) => record,
        }
    }

    /// Returns true if a new record was created.
    pub fn is_created(&self) -> bool {
        matches!(self, ClockOutcome::Created(_))
    }
}

impl AttendanceState {
    /// Checks that a clock-in is allowed from this state.
    ///
    /// An open session on any date blocks a new clock-in. A record with a
    /// clock-out but no clock-in is corrupted and is reported rather than
    /// resumed.
    pub fn ensure_can_clock_in(&self) -> AttendanceResult<()> {
        match self {
            AttendanceState::ClockedIn(_) => Err(AttendanceError::NotClockedOut),
            AttendanceState::Incomplete(record) => Err(AttendanceError::IncompleteRecord {
                record_id: record.id,
            }),
            AttendanceState::NoRecord | AttendanceState::Pending(_) | AttendanceState::ClockedOut(_) => Ok(()),
        }
    }

    /// Checks that a clock-out is allowed from this state.
    ///
    /// A closed session may be clocked out again; the later clock-out
    /// replaces the earlier one.
    pub fn ensure_can_clock_out(&self) -> AttendanceResult<()> {
        match self {
            AttendanceState::ClockedIn(_) | AttendanceState::ClockedOut(_) => Ok(()),
            AttendanceState::NoRecord | AttendanceState::Pending(_) | AttendanceState::Incomplete(_) => {
                Err(AttendanceError::NotClockedIn)
            }
        }
    }

    /// Applies a clock-in at `now`.
    ///
    /// A pending placeholder dated today is filled in place; otherwise a new
    /// record dated `now` is created.
    ///
    /// # Examples
    ///
    /// ```
    /// use daycare_attendance::models::AttendanceState;
    /// use chrono::NaiveDateTime;
    ///
    /// let now = NaiveDateTime::parse_from_str("2025-02-20 06:40:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let outcome = AttendanceState::NoRecord.clock_in(7, now, 60).unwrap();
    ///
    /// assert!(outcome.is_created());
    /// assert_eq!(outcome.record().clock_in, Some(now));
    /// assert_eq!(outcome.record().overtime_morning, 60);
    /// ```
    pub fn clock_in(self, user_id: u64, now: NaiveDateTime, overtime_morning: i64) -> AttendanceResult<ClockOutcome> {
        self.ensure_can_clock_in()?;

        match self {
            AttendanceState::Pending(mut record) if record.date == now.date() => {
                record.clock_in = Some(now);
                record.overtime_morning = overtime_morning;
                Ok(ClockOutcome::Updated(record))
            }
            _ => Ok(ClockOutcome::Created(TeacherAttendanceRecord {
                clock_in: Some(now),
                overtime_morning,
                ..TeacherAttendanceRecord::placeholder(user_id, now.date(), now)
            })),
        }
    }

    /// Applies a clock-out at `now`, computing work hours from the stored clock-in.
    ///
    /// No check is made that `now` is after the clock-in; a reversed pair
    /// yields negative work hours.
    pub fn clock_out(
        self,
        now: NaiveDateTime,
        overtime_evening: i64,
        policy: &AttendancePolicy,
    ) -> AttendanceResult<TeacherAttendanceRecord> {
        self.ensure_can_clock_out()?;

        let mut record = match self {
            AttendanceState::ClockedIn(record) | AttendanceState::ClockedOut(record) => record,
            _ => return Err(AttendanceError::NotClockedIn),
        };
        let clock_in = record.clock_in.ok_or(AttendanceError::NotClockedIn)?;

        record.clock_out = Some(now);
        record.overtime_evening = overtime_evening;
        record.work_hours = policy.work_hours(clock_in, now).work_hours;
        Ok(record)
    }
}
