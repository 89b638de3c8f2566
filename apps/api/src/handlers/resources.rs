//! Sample resources guarded by capability checks.

use axum::Json;
use axum::extract::{Extension, State};
use warden_core::UserIdentity;

use crate::dto::MessageResponse;
use crate::error::ApiResult;
use crate::middleware::require_capability;
use crate::state::AppState;

pub async fn list_courses_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<MessageResponse>> {
    require_capability(&state, &user, "course", "read").await?;
    Ok(Json(MessageResponse::new("course list")))
}

pub async fn create_course_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<MessageResponse>> {
    require_capability(&state, &user, "course", "create").await?;
    Ok(Json(MessageResponse::new("course created")))
}

pub async fn list_grades_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<MessageResponse>> {
    require_capability(&state, &user, "grades", "read").await?;
    Ok(Json(MessageResponse::new("grades list")))
}
