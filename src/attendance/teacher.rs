//! Teacher attendance service.
//!
//! Orchestrates a clock-in or clock-out: serialize on the user, read the most
//! recent record, check the transition, check the geofence, compute overtime,
//! then persist.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::calculation::{is_within_any_location, nearest_location};
use crate::config::AttendancePolicy;
use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{AttendanceState, GeoPoint, TeacherAttendanceRecord};
use crate::repository::{TeacherAttendanceRepository, WorkLocationRepository};

use super::locks::UserLocks;
use super::state_machine::ClockOutcome;

/// Input for a clock-in or clock-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockCommand {
    /// The teacher clocking in or out.
    pub user_id: u64,
    /// The moment of the event, supplied by the caller.
    pub now: NaiveDateTime,
    /// Where the teacher reports being.
    pub position: GeoPoint,
    /// Whether the teacher claims overtime for this event.
    pub overtime_requested: bool,
}

/// Runs the teacher attendance state machine against a repository.
#[derive(Debug)]
pub struct TeacherAttendanceService<R> {
    repository: Arc<R>,
    policy: AttendancePolicy,
    locks: UserLocks,
}

impl<R> TeacherAttendanceService<R>
where
    R: TeacherAttendanceRepository + WorkLocationRepository,
{
    /// Creates a service over `repository` using `policy`.
    pub fn new(repository: Arc<R>, policy: AttendancePolicy) -> Self {
        Self {
            repository,
            policy,
            locks: UserLocks::new(),
        }
    }

    /// Returns the policy in use.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    /// Clocks a teacher in.
    ///
    /// Rejects with [`AttendanceError::NotClockedOut`] if the most recent
    /// session (on any date) is still open, and with
    /// [`AttendanceError::OutsideWorkLocation`] if the position is outside
    /// every fence.
    pub async fn clock_in(&self, command: ClockCommand) -> AttendanceResult<ClockOutcome> {
        let user_id = command.user_id;
        let _guard = self.locks.acquire(user_id).await;

        let state = AttendanceState::from(self.repository.most_recent_attendance(user_id).await?);
        if let Err(err) = state.ensure_can_clock_in() {
            warn!(user_id, state = state.name(), error = %err, "Clock-in rejected");
            return Err(err);
        }

        self.ensure_in_work_location(user_id, command.position).await?;

        let overtime_morning = self
            .policy
            .morning_overtime(command.now, command.overtime_requested);
        if overtime_morning < 0 {
            debug!(user_id, overtime_morning, "Clock-in after day start with overtime requested");
        }

        let outcome = match state.clock_in(user_id, command.now, overtime_morning)? {
            ClockOutcome::Created(record) => {
                ClockOutcome::Created(self.repository.create_attendance(record).await?)
            }
            ClockOutcome::Updated(record) => {
                self.repository.update_attendance(&record).await?;
                ClockOutcome::Updated(record)
            }
        };

        info!(
            user_id,
            record_id = %outcome.record().id,
            created = outcome.is_created(),
            overtime_morning,
            "Clocked in"
        );
        Ok(outcome)
    }

    /// Clocks a teacher out.
    ///
    /// Rejects with [`AttendanceError::NotClockedIn`] if there is no record or
    /// the most recent one has no clock-in.
    pub async fn clock_out(&self, command: ClockCommand) -> AttendanceResult<TeacherAttendanceRecord> {
        let user_id = command.user_id;
        let _guard = self.locks.acquire(user_id).await;

        let state = AttendanceState::from(self.repository.most_recent_attendance(user_id).await?);
        if let Err(err) = state.ensure_can_clock_out() {
            warn!(user_id, state = state.name(), error = %err, "Clock-out rejected");
            return Err(err);
        }

        self.ensure_in_work_location(user_id, command.position).await?;

        let overtime_evening = self
            .policy
            .evening_overtime(command.now, command.overtime_requested);

        let record = state.clock_out(command.now, overtime_evening, &self.policy)?;
        self.repository.update_attendance(&record).await?;

        info!(
            user_id,
            record_id = %record.id,
            work_hours = %record.work_hours,
            overtime_evening,
            "Clocked out"
        );
        Ok(record)
    }

    /// Returns the user's most recent attendance record.
    pub async fn get_last(&self, user_id: u64) -> AttendanceResult<TeacherAttendanceRecord> {
        self.repository
            .most_recent_attendance(user_id)
            .await?
            .ok_or(AttendanceError::AttendanceNotFound { user_id })
    }

    async fn ensure_in_work_location(&self, user_id: u64, position: GeoPoint) -> AttendanceResult<()> {
        let locations = self.repository.list_work_locations().await?;
        if is_within_any_location(position, &locations, self.policy.geofence.tolerance_km) {
            return Ok(());
        }

        let nearest = nearest_location(position, &locations);
        let nearest_km = nearest.as_ref().map(|n| n.distance_km);
        warn!(
            user_id,
            latitude = position.latitude,
            longitude = position.longitude,
            nearest = nearest.as_ref().map(|n| n.location.name.as_str()),
            nearest_km,
            "Position outside every work location"
        );
        Err(AttendanceError::OutsideWorkLocation { nearest_km })
    }
}
