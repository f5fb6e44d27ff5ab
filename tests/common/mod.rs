use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use frontdesk::{
    application::{booking_service::BookingService, user_service::UserService},
    build_router,
    infrastructure::{
        in_memory_booking_repository::InMemoryBookingRepository,
        in_memory_user_repository::InMemoryUserRepository,
    },
    state::AppState,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn test_app() -> Router {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let booking_repository = Arc::new(InMemoryBookingRepository::new());

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let booking_service = Arc::new(BookingService::new(booking_repository, user_repository));

    build_router(AppState::new(user_service, booking_service))
}

pub async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(request)
        .await
        .expect("router should serve request");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();

    if body.is_empty() {
        return (status, Value::Null);
    }

    let value = serde_json::from_slice(&body).expect("body should be valid json");
    (status, value)
}

pub fn assert_problem(problem: &Value, expected_status: u16, expected_title: &str) {
    assert_eq!(
        problem.get("status").and_then(Value::as_u64),
        Some(u64::from(expected_status))
    );
    assert_eq!(
        problem.get("title").and_then(Value::as_str),
        Some(expected_title)
    );
    assert!(problem.get("detail").and_then(Value::as_str).is_some());
    assert!(
        problem
            .get("correlation_id")
            .and_then(Value::as_str)
            .is_some()
    );
    assert!(problem.get("type").and_then(Value::as_str).is_some());
}
