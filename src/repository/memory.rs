//! In-memory implementation of the attendance repositories.
//!
//! Used by the server binary and by tests. Data lives for the lifetime of the
//! process.

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{ChildAttendanceRecord, TeacherAttendanceRecord, WorkLocation};

use super::{ChildAttendanceRepository, TeacherAttendanceRepository, WorkLocationRepository};

/// Process-local storage for attendance records and work locations.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    teacher_attendance: RwLock<Vec<TeacherAttendanceRecord>>,
    child_attendance: RwLock<Vec<ChildAttendanceRecord>>,
    work_locations: RwLock<Vec<WorkLocation>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with work locations.
    pub fn with_work_locations(work_locations: Vec<WorkLocation>) -> Self {
        Self {
            work_locations: RwLock::new(work_locations),
            ..Self::default()
        }
    }

    /// Inserts a teacher attendance record as-is, bypassing the state machine.
    ///
    /// Used to seed placeholder rows created by other processes.
    pub async fn insert_teacher_attendance(&self, record: TeacherAttendanceRecord) {
        self.teacher_attendance.write().await.push(record);
    }

    /// Returns every teacher attendance record for a user, oldest first.
    pub async fn teacher_attendance_for(&self, user_id: u64) -> Vec<TeacherAttendanceRecord> {
        self.teacher_attendance
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Returns every child attendance record, oldest first.
    pub async fn child_attendance(&self) -> Vec<ChildAttendanceRecord> {
        self.child_attendance.read().await.clone()
    }
}

impl TeacherAttendanceRepository for InMemoryRepository {
    async fn most_recent_attendance(&self, user_id: u64) -> AttendanceResult<Option<TeacherAttendanceRecord>> {
        let records = self.teacher_attendance.read().await;
        // max_by_key keeps the last maximum, so ties go to the later insert.
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn create_attendance(&self, record: TeacherAttendanceRecord) -> AttendanceResult<TeacherAttendanceRecord> {
        let mut records = self.teacher_attendance.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(AttendanceError::repository(format!(
                "teacher attendance {} already exists",
                record.id
            )));
        }
        debug!(record_id = %record.id, user_id = record.user_id, "Created teacher attendance");
        records.push(record.clone());
        Ok(record)
    }

    async fn update_attendance(&self, record: &TeacherAttendanceRecord) -> AttendanceResult<()> {
        let mut records = self.teacher_attendance.write().await;
        let existing = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| {
                AttendanceError::repository(format!("teacher attendance {} does not exist", record.id))
            })?;
        *existing = record.clone();
        debug!(record_id = %record.id, user_id = record.user_id, "Updated teacher attendance");
        Ok(())
    }
}

impl WorkLocationRepository for InMemoryRepository {
    async fn list_work_locations(&self) -> AttendanceResult<Vec<WorkLocation>> {
        Ok(self.work_locations.read().await.clone())
    }
}

impl ChildAttendanceRepository for InMemoryRepository {
    async fn create_child_attendance(&self, record: ChildAttendanceRecord) -> AttendanceResult<ChildAttendanceRecord> {
        let mut records = self.child_attendance.write().await;
        debug!(record_id = %record.id, child_id = record.child_id, "Created child attendance");
        records.push(record.clone());
        Ok(record)
    }
}
