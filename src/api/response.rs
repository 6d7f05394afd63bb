//! Response types for the attendance API.
//!
//! Successful responses wrap their payload in [`DataResponse`]. Failures are
//! [`ApiError`] bodies with a status derived from the error kind.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, ErrorKind};

/// Success envelope: `{message, data}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Human-readable outcome, omitted on plain reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The payload.
    pub data: T,
}

impl<T> DataResponse<T> {
    /// A payload with an outcome message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data,
        }
    }

    /// A bare payload.
    pub fn data(data: T) -> Self {
        Self { message: None, data }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

/// Maps an error kind to its HTTP status.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::StateConflict | ErrorKind::OutOfRange => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Repository | ErrorKind::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<AttendanceError> for ApiErrorResponse {
    fn from(error: AttendanceError) -> Self {
        let status = status_for(error.kind());
        let code = error.code();
        let error = match &error {
            AttendanceError::OutsideWorkLocation {
                nearest_km: Some(km),
            } => ApiError::with_details(
                code,
                error.to_string(),
                format!("nearest work location is {:.3} km away", km),
            ),
            AttendanceError::Repository { message } => {
                ApiError::with_details(code, "Internal server error", message.clone())
            }
            AttendanceError::ConfigNotFound { .. } | AttendanceError::ConfigParseError { .. } => {
                ApiError::with_details(code, "Configuration error", error.to_string())
            }
            _ => ApiError::new(code, error.to_string()),
        };
        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_data_response_omits_missing_message() {
        let json = serde_json::to_value(DataResponse::data(1)).unwrap();
        assert_eq!(json, serde_json::json!({"data": 1}));

        let json = serde_json::to_value(DataResponse::with_message("ok", 1)).unwrap();
        assert_eq!(json, serde_json::json!({"message": "ok", "data": 1}));
    }

    #[test]
    fn test_state_conflict_is_bad_request() {
        let response: ApiErrorResponse = AttendanceError::NotClockedOut.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "NOT_CLOCKED_OUT");
        assert_eq!(response.error.message, "you have not clocked out yet");
    }

    #[test]
    fn test_not_found_is_404() {
        let response: ApiErrorResponse = AttendanceError::AttendanceNotFound { user_id: 3 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "ATTENDANCE_NOT_FOUND");
    }

    #[test]
    fn test_outside_fence_carries_distance() {
        let response: ApiErrorResponse = AttendanceError::OutsideWorkLocation {
            nearest_km: Some(12.5),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.details.as_deref(), Some("nearest work location is 12.500 km away"));
    }

    #[test]
    fn test_repository_error_is_500() {
        let response: ApiErrorResponse = AttendanceError::repository("disk full").into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.message, "Internal server error");
        assert_eq!(response.error.details.as_deref(), Some("disk full"));
    }
}
