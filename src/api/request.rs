//! Request types for the attendance API.
//!
//! Coordinates are optional in the JSON so a missing field can be told apart
//! from a literal `0`.

use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};
use crate::models::GeoPoint;

/// Request body for `POST /teacher-attendances/:user_id/clock-in`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockInRequest {
    /// Reported latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Reported longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Whether the teacher claims morning overtime.
    #[serde(default)]
    pub is_overtime_morning: bool,
}

impl ClockInRequest {
    /// Validates the reported position.
    pub fn position(&self) -> AttendanceResult<GeoPoint> {
        required_position(self.latitude, self.longitude)
    }
}

/// Request body for `PUT /teacher-attendances/:user_id/clock-out`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockOutRequest {
    /// Reported latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Reported longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Whether the teacher claims evening overtime.
    #[serde(default)]
    pub is_overtime_evening: bool,
}

impl ClockOutRequest {
    /// Validates the reported position.
    pub fn position(&self) -> AttendanceResult<GeoPoint> {
        required_position(self.latitude, self.longitude)
    }
}

/// Request body for `POST /child-attendances`.
///
/// `date` and `arrival` stay raw strings so parse failures surface as
/// `INVALID_DATE_FORMAT` rather than a generic JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildArrivalRequest {
    /// The child arriving.
    pub child_id: u64,
    /// Attendance date, `YYYY-MM-DD`.
    pub date: String,
    /// Arrival time, `YYYY-MM-DD HH:MM:SS`.
    pub arrival: String,
}

fn required_position(latitude: Option<f64>, longitude: Option<f64>) -> AttendanceResult<GeoPoint> {
    let latitude = latitude.ok_or_else(|| AttendanceError::required("latitude"))?;
    let longitude = longitude.ok_or_else(|| AttendanceError::required("longitude"))?;
    GeoPoint::checked(latitude, longitude)
}
