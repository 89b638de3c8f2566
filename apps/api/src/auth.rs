use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use warden_application::RegisterParams;
use warden_domain::RoleId;

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let initial_role_id = payload
        .role_id
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(RoleId::parse)
        .transpose()?;

    let user = state
        .user_service
        .register(RegisterParams {
            email: payload.email,
            password: payload.password,
            display_name: payload.display_name,
            initial_role_id,
        })
        .await?;

    tracing::info!(user_id = %user.id(), "user registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = state
        .user_service
        .login(payload.email.as_str(), payload.password.as_str())
        .await?;

    Ok(Json(LoginResponse::from(outcome)))
}
