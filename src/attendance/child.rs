//! Child attendance recorder.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;
use uuid::Uuid;

use crate::config::AttendancePolicy;
use crate::error::{AttendanceError, AttendanceResult};
use crate::models::ChildAttendanceRecord;
use crate::repository::ChildAttendanceRepository;

/// Accepted date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const TIMESTAMP_FORMAT_HINT: &str = "YYYY-MM-DD HH:MM:SS";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> AttendanceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| AttendanceError::InvalidDateFormat {
        field: field.to_string(),
        value: value.to_string(),
        expected: "YYYY-MM-DD".to_string(),
    })
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp. A `T` separator is also accepted.
pub fn parse_timestamp(field: &str, value: &str) -> AttendanceResult<NaiveDateTime> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| AttendanceError::InvalidDateFormat {
            field: field.to_string(),
            value: value.to_string(),
            expected: TIMESTAMP_FORMAT_HINT.to_string(),
        })
}

/// Builds a new arrival record with its morning overtime.
///
/// The arrival's own calendar date is not checked against `date`.
pub fn build_arrival(
    child_id: u64,
    date: NaiveDate,
    arrival: NaiveDateTime,
    policy: &AttendancePolicy,
) -> ChildAttendanceRecord {
    ChildAttendanceRecord {
        id: Uuid::new_v4(),
        child_id,
        date,
        arrival,
        departure: None,
        overtime_morning: policy.child_morning_overtime(arrival),
        overtime_evening: 0,
    }
}

/// Records child arrivals against a repository.
#[derive(Debug)]
pub struct ChildAttendanceService<R> {
    repository: Arc<R>,
    policy: AttendancePolicy,
}

impl<R: ChildAttendanceRepository> ChildAttendanceService<R> {
    /// Creates a recorder over `repository` using `policy`.
    pub fn new(repository: Arc<R>, policy: AttendancePolicy) -> Self {
        Self { repository, policy }
    }

    /// Parses the raw `date` and `arrival` strings and persists a new record.
    pub async fn record_arrival(
        &self,
        child_id: u64,
        date: &str,
        arrival: &str,
    ) -> AttendanceResult<ChildAttendanceRecord> {
        let date = parse_date("date", date)?;
        let arrival = parse_timestamp("arrival", arrival)?;

        let record = build_arrival(child_id, date, arrival, &self.policy);
        let record = self.repository.create_child_attendance(record).await?;

        info!(
            child_id,
            record_id = %record.id,
            overtime_morning = record.overtime_morning,
            "Recorded child arrival"
        );
        Ok(record)
    }
}
