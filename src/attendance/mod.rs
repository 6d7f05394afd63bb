//! Attendance services.
//!
//! - [`TeacherAttendanceService`] runs clock-in, clock-out and last-record
//!   lookups for teachers.
//! - [`ChildAttendanceService`] records child arrivals.
//!
//! Both take the current time from the caller. The HTTP layer samples it from
//! a [`Clock`].

mod child;
mod clock;
mod locks;
mod state_machine;
mod teacher;

pub use child::{ChildAttendanceService, DATE_FORMAT, build_arrival, parse_date, parse_timestamp};
pub use clock::{Clock, FixedClock, SystemClock};
pub use locks::UserLocks;
pub use state_machine::ClockOutcome;
pub use teacher::{ClockCommand, TeacherAttendanceService};
