use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};

mod common;
use common::{assert_problem, request_json, test_app};

#[tokio::test]
async fn booking_lifecycle_end_to_end() {
    let app = test_app();

    let (status, _) = request_json(
        app.clone(),
        Request::builder()
            .method("POST")
            .uri("/api/v1/users")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "name": "Alice", "age": 30 }).to_string(),
            ))
            .expect("valid register request"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, created) = request_json(
        app.clone(),
        Request::builder()
            .method("POST")
            .uri("/api/v1/bookings")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "user_name": "Alice",
                    "booking_date": "2024-01-01T00:00:00Z"
                })
                .to_string(),
            ))
            .expect("valid booking request"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created.get("user_name").and_then(Value::as_str),
        Some("Alice")
    );
    assert_eq!(
        created.get("booking_date").and_then(Value::as_str),
        Some("2024-01-01T00:00:00Z")
    );

    let (status, listed) = request_json(
        app.clone(),
        Request::builder()
            .method("GET")
            .uri("/api/v1/bookings/Alice")
            .body(Body::empty())
            .expect("valid list request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = listed
        .get("items")
        .and_then(Value::as_array)
        .expect("list must include items array");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("user_name").and_then(Value::as_str),
        Some("Alice")
    );

    // Underage registration fails and must not disturb the directory.
    let (status, problem) = request_json(
        app.clone(),
        Request::builder()
            .method("POST")
            .uri("/api/v1/users")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "name": "Bob", "age": 15 }).to_string()))
            .expect("valid underage register request"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Validation failed");

    let (status, _) = request_json(
        app.clone(),
        Request::builder()
            .method("GET")
            .uri("/api/v1/users/Alice")
            .body(Body::empty())
            .expect("valid get alice request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, problem) = request_json(
        app.clone(),
        Request::builder()
            .method("GET")
            .uri("/api/v1/users/Bob")
            .body(Body::empty())
            .expect("valid get bob request"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_problem(&problem, 404, "Not found");

    // Booking for a user that was never registered.
    let (status, problem) = request_json(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/v1/bookings")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "user_name": "Carol",
                    "booking_date": "2024-01-01T00:00:00Z"
                })
                .to_string(),
            ))
            .expect("valid unknown-user booking request"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Unknown user");
}

#[tokio::test]
async fn booking_for_unknown_user_leaves_ledger_empty() {
    let app = test_app();

    let (status, problem) = request_json(
        app.clone(),
        Request::builder()
            .method("POST")
            .uri("/api/v1/bookings")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "user_name": "Carol",
                    "booking_date": "2024-01-01T00:00:00Z"
                })
                .to_string(),
            ))
            .expect("valid unknown-user booking request"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Unknown user");

    let (status, listed) = request_json(
        app,
        Request::builder()
            .method("GET")
            .uri("/api/v1/bookings/Carol")
            .body(Body::empty())
            .expect("valid list request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = listed
        .get("items")
        .and_then(Value::as_array)
        .expect("list must include items array");
    assert!(items.is_empty());
}

#[tokio::test]
async fn booking_with_blank_user_name_is_rejected() {
    let (status, problem) = request_json(
        test_app(),
        Request::builder()
            .method("POST")
            .uri("/api/v1/bookings")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "user_name": "  ",
                    "booking_date": "2024-01-01T00:00:00Z"
                })
                .to_string(),
            ))
            .expect("valid blank user_name booking request"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_problem(&problem, 400, "Validation failed");
}

#[tokio::test]
async fn listing_is_scoped_to_the_requested_user() {
    let app = test_app();

    for name in ["Alice", "Bob"] {
        let (status, _) = request_json(
            app.clone(),
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "name": name, "age": 30 }).to_string()))
                .expect("valid register request"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = request_json(
            app.clone(),
            Request::builder()
                .method("POST")
                .uri("/api/v1/bookings")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "user_name": name,
                        "booking_date": "2024-02-01T09:00:00Z"
                    })
                    .to_string(),
                ))
                .expect("valid booking request"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = request_json(
        app,
        Request::builder()
            .method("GET")
            .uri("/api/v1/bookings/Bob")
            .body(Body::empty())
            .expect("valid list request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = listed
        .get("items")
        .and_then(Value::as_array)
        .expect("list must include items array");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("user_name").and_then(Value::as_str),
        Some("Bob")
    );
}
