//! Integration tests for the daycare attendance API.
//!
//! This suite drives the router end to end with a pinned clock:
//! - Teacher clock-in / clock-out cycles and overtime
//! - State conflicts (double clock-in, clock-out without clock-in)
//! - Geofence rejections
//! - Last-record lookups
//! - Child arrivals
//! - Request validation errors

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use daycare_attendance::api::{AppState, create_router};
use daycare_attendance::attendance::FixedClock;
use daycare_attendance::config::ConfigLoader;
use daycare_attendance::models::TeacherAttendanceRecord;

// =============================================================================
// Test Helpers
// =============================================================================

const SCHOOL_LAT: f64 = -7.688025;
const SCHOOL_LON: f64 = 110.414599;

struct TestApp {
    router: Router,
    clock: Arc<FixedClock>,
    state: AppState,
}

impl TestApp {
    fn new() -> Self {
        let config = ConfigLoader::load("./config/daycare").expect("Failed to load config");
        let clock = Arc::new(FixedClock::new(at("2025-02-20", "07:00:00")));
        let state = AppState::new(&config, clock.clone());
        Self {
            router: create_router(state.clone()),
            clock,
            state,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();

        (status, json)
    }

    async fn clock_in_at(&self, user_id: u64, time: NaiveDateTime, overtime: bool) -> (StatusCode, Value) {
        self.clock.set(time);
        self.send(
            "POST",
            &format!("/teacher-attendances/{}/clock-in", user_id),
            Some(json!({
                "latitude": SCHOOL_LAT,
                "longitude": SCHOOL_LON,
                "is_overtime_morning": overtime
            })),
        )
        .await
    }

    async fn clock_out_at(&self, user_id: u64, time: NaiveDateTime, overtime: bool) -> (StatusCode, Value) {
        self.clock.set(time);
        self.send(
            "PUT",
            &format!("/teacher-attendances/{}/clock-out", user_id),
            Some(json!({
                "latitude": SCHOOL_LAT,
                "longitude": SCHOOL_LON,
                "is_overtime_evening": overtime
            })),
        )
        .await
    }

    async fn last(&self, user_id: u64) -> (StatusCode, Value) {
        self.send("GET", &format!("/teacher-attendances/{}/last", user_id), None)
            .await
    }
}

fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
}

fn work_hours(data: &Value) -> Decimal {
    Decimal::from_str(data["work_hours"].as_str().unwrap()).unwrap()
}

// =============================================================================
// SECTION 1: Clock-in / clock-out cycle
// =============================================================================

#[tokio::test]
async fn test_full_day_with_overtime() {
    let app = TestApp::new();

    let (status, body) = app.clock_in_at(1, at("2025-02-20", "06:40:00"), true).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["overtime_morning"], 60);

    let (status, body) = app.clock_out_at(1, at("2025-02-20", "16:30:00"), true).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher attendance updated successfully");
    assert_eq!(body["data"]["overtime_evening"], 30);
    assert_eq!(body["data"]["clock_out"], "2025-02-20T16:30:00");
    assert_eq!(work_hours(&body["data"]), Decimal::new(80, 1));
}

#[tokio::test]
async fn test_partial_day_work_hours_truncate() {
    let app = TestApp::new();

    app.clock_in_at(1, at("2025-02-20", "09:10:00"), false).await;
    // 09:10 to 14:55 is 5h45m, which truncates to 5.7.
    let (status, body) = app.clock_out_at(1, at("2025-02-20", "14:55:00"), false).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(work_hours(&body["data"]), Decimal::new(57, 1));
    assert_eq!(body["data"]["overtime_morning"], 0);
    assert_eq!(body["data"]["overtime_evening"], 0);
}

#[tokio::test]
async fn test_morning_overtime_uncapped_below_limit() {
    let app = TestApp::new();
    let (status, body) = app.clock_in_at(1, at("2025-02-20", "07:30:00"), true).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["overtime_morning"], 30);
}

#[tokio::test]
async fn test_late_clock_in_with_overtime_flag_goes_negative() {
    let app = TestApp::new();
    let (status, body) = app.clock_in_at(1, at("2025-02-20", "08:15:00"), true).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["overtime_morning"], -15);
}

#[tokio::test]
async fn test_clock_out_before_clock_in_gives_negative_hours() {
    let app = TestApp::new();
    app.clock_in_at(1, at("2025-02-20", "12:00:00"), false).await;
    let (status, body) = app.clock_out_at(1, at("2025-02-20", "09:00:00"), false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(work_hours(&body["data"]), Decimal::new(-30, 1));
}

#[tokio::test]
async fn test_consecutive_days_create_separate_records() {
    let app = TestApp::new();

    app.clock_in_at(1, at("2025-02-20", "07:50:00"), false).await;
    app.clock_out_at(1, at("2025-02-20", "16:05:00"), false).await;
    let (status, _) = app.clock_in_at(1, at("2025-02-21", "07:50:00"), false).await;
    assert_eq!(status, StatusCode::CREATED);

    let records = app.state.repository().teacher_attendance_for(1).await;
    assert_eq!(records.len(), 2);
    assert!(records[0].clock_out.is_some());
    assert!(records[1].clock_out.is_none());
}

#[tokio::test]
async fn test_placeholder_record_is_resumed() {
    let app = TestApp::new();
    let date = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
    app.state
        .repository()
        .insert_teacher_attendance(TeacherAttendanceRecord::placeholder(
            1,
            date,
            at("2025-02-20", "00:00:01"),
        ))
        .await;

    let (status, body) = app.clock_in_at(1, at("2025-02-20", "07:45:00"), true).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher attendance updated successfully");
    assert_eq!(body["data"]["overtime_morning"], 15);
    assert_eq!(app.state.repository().teacher_attendance_for(1).await.len(), 1);
}

// =============================================================================
// SECTION 2: State conflicts
// =============================================================================

#[tokio::test]
async fn test_double_clock_in_rejected() {
    let app = TestApp::new();

    app.clock_in_at(1, at("2025-02-20", "07:00:00"), false).await;
    let (status, body) = app.clock_in_at(1, at("2025-02-20", "07:05:00"), false).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_CLOCKED_OUT");
    assert_eq!(body["message"], "you have not clocked out yet");
}

#[tokio::test]
async fn test_open_session_from_previous_day_blocks_clock_in() {
    let app = TestApp::new();

    app.clock_in_at(1, at("2025-02-20", "07:00:00"), false).await;
    let (status, body) = app.clock_in_at(1, at("2025-02-21", "07:00:00"), false).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_CLOCKED_OUT");
}

#[tokio::test]
async fn test_clock_out_without_clock_in_rejected() {
    let app = TestApp::new();
    let (status, body) = app.clock_out_at(1, at("2025-02-20", "16:00:00"), false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_CLOCKED_IN");
    assert_eq!(body["message"], "you have not clocked in yet");
}

#[tokio::test]
async fn test_incomplete_record_rejected_loudly() {
    let app = TestApp::new();
    let mut corrupted = TeacherAttendanceRecord::placeholder(
        1,
        NaiveDate::from_ymd_opt(2025, 2, 19).unwrap(),
        at("2025-02-19", "07:00:00"),
    );
    corrupted.clock_out = Some(at("2025-02-19", "16:00:00"));
    app.state.repository().insert_teacher_attendance(corrupted).await;

    let (status, body) = app.clock_in_at(1, at("2025-02-20", "07:00:00"), false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INCOMPLETE_RECORD");

    let (status, body) = app.clock_out_at(1, at("2025-02-20", "16:00:00"), false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_CLOCKED_IN");
}

#[tokio::test]
async fn test_users_are_independent() {
    let app = TestApp::new();

    app.clock_in_at(1, at("2025-02-20", "07:00:00"), false).await;
    let (status, _) = app.clock_in_at(2, at("2025-02-20", "07:00:00"), false).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.clock_out_at(3, at("2025-02-20", "16:00:00"), false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// SECTION 3: Geofence
// =============================================================================

#[tokio::test]
async fn test_clock_in_outside_fence_rejected() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            "POST",
            "/teacher-attendances/1/clock-in",
            Some(json!({"latitude": -7.795580, "longitude": 110.369490})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUTSIDE_WORK_LOCATION");
    assert_eq!(body["message"], "you are not in work location");
    assert!(body["details"].as_str().unwrap().contains("km away"));

    let (status, _) = app.last(1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clock_in_just_inside_fence() {
    let app = TestApp::new();
    // 0.0026 degrees of latitude is roughly 289 m.
    let (status, _) = app
        .send(
            "POST",
            "/teacher-attendances/1/clock-in",
            Some(json!({"latitude": SCHOOL_LAT + 0.0026, "longitude": SCHOOL_LON})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_clock_out_outside_fence_keeps_session_open() {
    let app = TestApp::new();
    app.clock_in_at(1, at("2025-02-20", "07:00:00"), false).await;

    app.clock.advance(Duration::hours(9));
    let (status, body) = app
        .send(
            "PUT",
            "/teacher-attendances/1/clock-out",
            Some(json!({"latitude": 0, "longitude": 0, "is_overtime_evening": true})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUTSIDE_WORK_LOCATION");

    let (_, body) = app.last(1).await;
    assert!(body["data"]["clock_out"].is_null());
}

// =============================================================================
// SECTION 4: Last record
// =============================================================================

#[tokio::test]
async fn test_last_returns_most_recent_record() {
    let app = TestApp::new();
    app.clock_in_at(1, at("2025-02-20", "07:00:00"), false).await;
    app.clock_out_at(1, at("2025-02-20", "16:00:00"), false).await;
    app.clock_in_at(1, at("2025-02-21", "07:10:00"), false).await;

    let (status, body) = app.last(1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["date"], "2025-02-21");
    assert_eq!(body["data"]["clock_in"], "2025-02-21T07:10:00");
}

#[tokio::test]
async fn test_last_is_idempotent() {
    let app = TestApp::new();
    app.clock_in_at(1, at("2025-02-20", "07:00:00"), false).await;

    let (_, first) = app.last(1).await;
    let (_, second) = app.last(1).await;
    assert_eq!(first, second);
}

// =============================================================================
// SECTION 5: Child arrivals
// =============================================================================

#[tokio::test]
async fn test_child_arrival_overtime_units() {
    let app = TestApp::new();
    let cases = [("07:30:00", 1), ("07:44:00", 1), ("07:45:00", 0), ("06:50:00", 4)];

    for (time, expected) in cases {
        let (status, body) = app
            .send(
                "POST",
                "/child-attendances",
                Some(json!({
                    "child_id": 7,
                    "date": "2025-02-20",
                    "arrival": format!("2025-02-20 {}", time)
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["overtime_morning"], expected, "arrival {}", time);
        assert_eq!(body["data"]["overtime_evening"], 0);
        assert!(body["data"]["departure"].is_null());
    }

    assert_eq!(app.state.repository().child_attendance().await.len(), 4);
}

#[tokio::test]
async fn test_child_arrival_bad_date() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            "POST",
            "/child-attendances",
            Some(json!({"child_id": 7, "date": "20-02-2025", "arrival": "2025-02-20 07:30:00"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE_FORMAT");
    assert!(body["message"].as_str().unwrap().contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn test_child_arrival_missing_field() {
    let app = TestApp::new();
    let (status, body) = app
        .send("POST", "/child-attendances", Some(json!({"child_id": 7, "date": "2025-02-20"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 6: Request validation
// =============================================================================

#[tokio::test]
async fn test_zero_coordinates_are_not_missing() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            "POST",
            "/teacher-attendances/1/clock-in",
            Some(json!({"latitude": 0.0, "longitude": 0.0})),
        )
        .await;
    // Accepted as a coordinate, then rejected by the fence.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUTSIDE_WORK_LOCATION");
}

#[tokio::test]
async fn test_out_of_range_latitude() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            "POST",
            "/teacher-attendances/1/clock-in",
            Some(json!({"latitude": 95.0, "longitude": SCHOOL_LON})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "latitude must be between -90 and 90");
}

#[tokio::test]
async fn test_wrong_field_type_is_malformed() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            "POST",
            "/teacher-attendances/1/clock-in",
            Some(json!({"latitude": "north", "longitude": SCHOOL_LON})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = TestApp::new();
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/teacher-attendances/1/clock-in")
                .body(Body::from(json!({"latitude": SCHOOL_LAT, "longitude": SCHOOL_LON}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
