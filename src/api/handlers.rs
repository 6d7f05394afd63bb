//! HTTP request handlers for the attendance API.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::{ClockCommand, ClockOutcome};
use crate::error::AttendanceError;
use crate::repository::WorkLocationRepository;

use super::request::{ChildArrivalRequest, ClockInRequest, ClockOutRequest};
use super::response::{ApiError, ApiErrorResponse, DataResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/teacher-attendances/:user_id/clock-in", post(clock_in_handler))
        .route("/teacher-attendances/:user_id/clock-out", put(clock_out_handler))
        .route("/teacher-attendances/:user_id/last", get(last_attendance_handler))
        .route("/child-attendances", post(child_arrival_handler))
        .route("/work-locations", get(work_locations_handler))
        .with_state(state)
}

/// Handler for `POST /teacher-attendances/:user_id/clock-in`.
async fn clock_in_handler(
    State(state): State<AppState>,
    user_id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ClockInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (user_id, request) = match (user_id, payload) {
        (Ok(Path(user_id)), Ok(Json(request))) => (user_id, request),
        (Err(rejection), _) => return path_rejection(correlation_id, rejection).into_response(),
        (_, Err(rejection)) => return json_rejection(correlation_id, rejection).into_response(),
    };
    info!(correlation_id = %correlation_id, user_id, "Processing clock-in");

    let position = match request.position() {
        Ok(position) => position,
        Err(err) => return rejected(correlation_id, err),
    };
    let command = ClockCommand {
        user_id,
        now: state.clock().now(),
        position,
        overtime_requested: request.is_overtime_morning,
    };

    match state.teacher().clock_in(command).await {
        Ok(ClockOutcome::Created(record)) => (
            StatusCode::CREATED,
            Json(DataResponse::with_message(
                "Teacher attendance created successfully",
                record,
            )),
        )
            .into_response(),
        Ok(ClockOutcome::Updated(record)) => (
            StatusCode::OK,
            Json(DataResponse::with_message(
                "Teacher attendance updated successfully",
                record,
            )),
        )
            .into_response(),
        Err(err) => rejected(correlation_id, err),
    }
}

/// Handler for `PUT /teacher-attendances/:user_id/clock-out`.
async fn clock_out_handler(
    State(state): State<AppState>,
    user_id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ClockOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (user_id, request) = match (user_id, payload) {
        (Ok(Path(user_id)), Ok(Json(request))) => (user_id, request),
        (Err(rejection), _) => return path_rejection(correlation_id, rejection).into_response(),
        (_, Err(rejection)) => return json_rejection(correlation_id, rejection).into_response(),
    };
    info!(correlation_id = %correlation_id, user_id, "Processing clock-out");

    let position = match request.position() {
        Ok(position) => position,
        Err(err) => return rejected(correlation_id, err),
    };
    let command = ClockCommand {
        user_id,
        now: state.clock().now(),
        position,
        overtime_requested: request.is_overtime_evening,
    };

    match state.teacher().clock_out(command).await {
        Ok(record) => (
            StatusCode::OK,
            Json(DataResponse::with_message(
                "Teacher attendance updated successfully",
                record,
            )),
        )
            .into_response(),
        Err(err) => rejected(correlation_id, err),
    }
}

/// Handler for `GET /teacher-attendances/:user_id/last`.
async fn last_attendance_handler(
    State(state): State<AppState>,
    user_id: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let user_id = match user_id {
        Ok(Path(user_id)) => user_id,
        Err(rejection) => return path_rejection(correlation_id, rejection).into_response(),
    };

    match state.teacher().get_last(user_id).await {
        Ok(record) => (StatusCode::OK, Json(DataResponse::data(record))).into_response(),
        Err(err) => rejected(correlation_id, err),
    }
}

/// Handler for `POST /child-attendances`.
async fn child_arrival_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChildArrivalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };
    info!(
        correlation_id = %correlation_id,
        child_id = request.child_id,
        "Processing child arrival"
    );

    match state
        .child()
        .record_arrival(request.child_id, &request.date, &request.arrival)
        .await
    {
        Ok(record) => (
            StatusCode::CREATED,
            Json(DataResponse::with_message(
                "Child attendance created successfully",
                record,
            )),
        )
            .into_response(),
        Err(err) => rejected(correlation_id, err),
    }
}

/// Handler for `GET /work-locations`.
async fn work_locations_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.repository().list_work_locations().await {
        Ok(locations) => (StatusCode::OK, Json(DataResponse::data(locations))).into_response(),
        Err(err) => rejected(correlation_id, err),
    }
}

/// Logs a domain error and converts it to a response.
fn rejected(correlation_id: Uuid, err: AttendanceError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = err.code(),
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

fn path_rejection(correlation_id: Uuid, rejection: PathRejection) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path parameter");
    ApiErrorResponse::bad_request(ApiError::validation_error(format!(
        "user_id must be a non-negative integer: {}",
        rejection.body_text()
    )))
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
