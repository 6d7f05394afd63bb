//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejection path of the attendance core. Each variant belongs to
//! exactly one [`ErrorKind`] so callers can tell a user-facing rejection from
//! an internal failure without matching on messages.

use thiserror::Error;
use uuid::Uuid;

/// Coarse classification of an [`AttendanceError`].
///
/// Validation, state conflicts and out-of-range rejections are reported back
/// to the caller and never retried. Repository and configuration failures are
/// internal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// The requested transition is not allowed from the current attendance state.
    StateConflict,
    /// The reported position is outside every work-location fence.
    OutOfRange,
    /// The requested record does not exist.
    NotFound,
    /// The persistence layer failed.
    Repository,
    /// Configuration could not be loaded or is invalid.
    Config,
}

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use daycare_attendance::error::{AttendanceError, ErrorKind};
///
/// let error = AttendanceError::NotClockedOut;
/// assert_eq!(error.to_string(), "you have not clocked out yet");
/// assert_eq!(error.kind(), ErrorKind::StateConflict);
/// ```
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// A request field was missing or out of its valid range.
    #[error("{field} {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A date or timestamp string could not be parsed.
    #[error("invalid {field} format '{value}'. use {expected}")]
    InvalidDateFormat {
        /// The field being parsed (e.g. "date", "arrival").
        field: String,
        /// The raw value supplied.
        value: String,
        /// The accepted format, in human form.
        expected: String,
    },

    /// A clock-in was attempted while the previous session is still open.
    #[error("you have not clocked out yet")]
    NotClockedOut,

    /// A clock-out was attempted without an open session.
    #[error("you have not clocked in yet")]
    NotClockedIn,

    /// The most recent record has a clock-out but no clock-in.
    #[error("attendance record {record_id} has a clock-out without a clock-in")]
    IncompleteRecord {
        /// The corrupted record.
        record_id: Uuid,
    },

    /// The reported position is not within any work-location fence.
    #[error("you are not in work location")]
    OutsideWorkLocation {
        /// Distance in kilometres to the closest known location, if any exist.
        nearest_km: Option<f64>,
    },

    /// No attendance record exists for the user.
    #[error("no attendance record found for user {user_id}")]
    AttendanceNotFound {
        /// The user that was looked up.
        user_id: u64,
    },

    /// The persistence layer failed.
    #[error("repository error: {message}")]
    Repository {
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl AttendanceError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AttendanceError::InvalidInput { .. } | AttendanceError::InvalidDateFormat { .. } => {
                ErrorKind::Validation
            }
            AttendanceError::NotClockedOut
            | AttendanceError::NotClockedIn
            | AttendanceError::IncompleteRecord { .. } => ErrorKind::StateConflict,
            AttendanceError::OutsideWorkLocation { .. } => ErrorKind::OutOfRange,
            AttendanceError::AttendanceNotFound { .. } => ErrorKind::NotFound,
            AttendanceError::Repository { .. } => ErrorKind::Repository,
            AttendanceError::ConfigNotFound { .. } | AttendanceError::ConfigParseError { .. } => {
                ErrorKind::Config
            }
        }
    }

    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceError::InvalidInput { .. } => "VALIDATION_ERROR",
            AttendanceError::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
            AttendanceError::NotClockedOut => "NOT_CLOCKED_OUT",
            AttendanceError::NotClockedIn => "NOT_CLOCKED_IN",
            AttendanceError::IncompleteRecord { .. } => "INCOMPLETE_RECORD",
            AttendanceError::OutsideWorkLocation { .. } => "OUTSIDE_WORK_LOCATION",
            AttendanceError::AttendanceNotFound { .. } => "ATTENDANCE_NOT_FOUND",
            AttendanceError::Repository { .. } => "REPOSITORY_ERROR",
            AttendanceError::ConfigNotFound { .. } | AttendanceError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
        }
    }

    /// Shorthand for a missing required field.
    pub fn required(field: &str) -> Self {
        AttendanceError::InvalidInput {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }

    /// Shorthand for a repository failure.
    pub fn repository(message: impl Into<String>) -> Self {
        AttendanceError::Repository {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return AttendanceError.
pub type AttendanceResult<T> = Result<T, AttendanceError>;
