use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::dto::{BookingListResponse, BookingResponse, CreateBookingRequest},
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    let created = state
        .booking_service
        .create_booking(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_bookings(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> ApiResult<Json<BookingListResponse>> {
    let bookings = state
        .booking_service
        .list_bookings(&user_name)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(bookings))
}
