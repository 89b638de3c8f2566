use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use warden_application::CreateRoleInput;
use warden_core::UserIdentity;
use warden_domain::{RoleId, UserId};

use crate::dto::{AssignRoleRequest, CreateRoleRequest, RoleResponse};
use crate::error::ApiResult;
use crate::middleware::require_admin;
use crate::state::AppState;

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    require_admin(&state, &user).await?;

    let role = state
        .rbac_admin_service
        .create_role(CreateRoleInput {
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .rbac_admin_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .rbac_admin_service
        .get_role(RoleId::parse(role_id.as_str())?)
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(role_id): Path<String>,
) -> ApiResult<StatusCode> {
    require_admin(&state, &user).await?;

    state
        .rbac_admin_service
        .delete_role(RoleId::parse(role_id.as_str())?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn my_roles_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .rbac_admin_service
        .roles_for_user(UserId::from_uuid(user.user_id()))
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn user_roles_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .rbac_admin_service
        .roles_for_user(UserId::parse(user_id.as_str())?)
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn assign_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<AssignRoleRequest>,
) -> ApiResult<StatusCode> {
    require_admin(&state, &user).await?;

    let user_id = UserId::parse(payload.user_id.as_str())?;
    let role_id = RoleId::parse(payload.role_id.as_str())?;
    state
        .rbac_admin_service
        .assign_role(user_id, role_id)
        .await?;

    tracing::info!(actor = %user.user_id(), %user_id, %role_id, "role assigned");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path((user_id, role_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    require_admin(&state, &user).await?;

    let user_id = UserId::parse(user_id.as_str())?;
    let role_id = RoleId::parse(role_id.as_str())?;
    state
        .rbac_admin_service
        .remove_role(user_id, role_id)
        .await?;

    tracing::info!(actor = %user.user_id(), %user_id, %role_id, "role removed");
    Ok(StatusCode::NO_CONTENT)
}
