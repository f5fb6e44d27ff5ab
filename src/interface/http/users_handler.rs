use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::dto::{HealthResponse, RegisterUserRequest, UpdateUserAgeRequest, UserResponse},
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let created = state
        .user_service
        .register_user(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user(&name)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(user))
}

pub async fn update_user_age(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdateUserAgeRequest>,
) -> ApiResult<Json<UserResponse>> {
    let updated = state
        .user_service
        .update_user_age(&name, request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .user_service
        .delete_user(&name)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(StatusCode::NO_CONTENT)
}
