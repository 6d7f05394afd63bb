//! Repository trait definitions for attendance persistence.
//!
//! The attendance core only talks to storage through these traits. All
//! operations are async; implementations report failures as
//! [`AttendanceError::Repository`](crate::error::AttendanceError::Repository).

mod memory;

pub use memory::InMemoryRepository;

use crate::error::AttendanceResult;
use crate::models::{ChildAttendanceRecord, TeacherAttendanceRecord, WorkLocation};

/// Storage for teacher attendance records.
pub trait TeacherAttendanceRepository: Send + Sync {
    /// Returns the record with the latest creation time for the user, on any date.
    fn most_recent_attendance(
        &self,
        user_id: u64,
    ) -> impl Future<Output = AttendanceResult<Option<TeacherAttendanceRecord>>> + Send;

    /// Persists a new record and returns it as stored.
    fn create_attendance(
        &self,
        record: TeacherAttendanceRecord,
    ) -> impl Future<Output = AttendanceResult<TeacherAttendanceRecord>> + Send;

    /// Replaces an existing record, matched by id.
    fn update_attendance(
        &self,
        record: &TeacherAttendanceRecord,
    ) -> impl Future<Output = AttendanceResult<()>> + Send;
}

/// Read access to the registered work locations.
pub trait WorkLocationRepository: Send + Sync {
    /// Returns every registered work location.
    fn list_work_locations(&self) -> impl Future<Output = AttendanceResult<Vec<WorkLocation>>> + Send;
}

/// Storage for child attendance records.
pub trait ChildAttendanceRepository: Send + Sync {
    /// Persists a new record and returns it as stored.
    fn create_child_attendance(
        &self,
        record: ChildAttendanceRecord,
    ) -> impl Future<Output = AttendanceResult<ChildAttendanceRecord>> + Send;
}
