//! Core data models for the attendance engine.
//!
//! This module contains the attendance records, work locations and the
//! lifecycle state used by the teacher attendance state machine.

mod child_attendance;
mod teacher_attendance;
mod work_location;

pub use child_attendance::ChildAttendanceRecord;
pub use teacher_attendance::{AttendanceState, TeacherAttendanceRecord};
pub use work_location::{GeoPoint, WorkLocation};
