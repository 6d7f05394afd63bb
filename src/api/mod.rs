//! HTTP API for the attendance core.
//!
//! Routes clock-in, clock-out, last-record lookups, child arrivals and the
//! work-location listing onto the attendance services.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ChildArrivalRequest, ClockInRequest, ClockOutRequest};
pub use response::{ApiError, ApiErrorResponse, DataResponse, status_for};
pub use state::AppState;
