use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use warden_application::CreatePermissionInput;
use warden_core::UserIdentity;
use warden_domain::{PermissionId, RoleId};

use crate::dto::{CreatePermissionRequest, GrantPermissionRequest, PermissionResponse};
use crate::error::ApiResult;
use crate::middleware::require_admin;
use crate::state::AppState;

pub async fn create_permission_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<CreatePermissionRequest>,
) -> ApiResult<(StatusCode, Json<PermissionResponse>)> {
    require_admin(&state, &user).await?;

    let permission = state
        .rbac_admin_service
        .create_permission(CreatePermissionInput {
            name: payload.name,
            resource: payload.resource,
            action: payload.action,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PermissionResponse::from(permission))))
}

pub async fn list_permissions_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PermissionResponse>>> {
    let permissions = state
        .rbac_admin_service
        .list_permissions()
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(permissions))
}

pub async fn get_permission_handler(
    State(state): State<AppState>,
    Path(permission_id): Path<String>,
) -> ApiResult<Json<PermissionResponse>> {
    let permission = state
        .rbac_admin_service
        .get_permission(PermissionId::parse(permission_id.as_str())?)
        .await?;

    Ok(Json(PermissionResponse::from(permission)))
}

pub async fn delete_permission_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(permission_id): Path<String>,
) -> ApiResult<StatusCode> {
    require_admin(&state, &user).await?;

    state
        .rbac_admin_service
        .delete_permission(PermissionId::parse(permission_id.as_str())?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn role_permissions_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<Vec<PermissionResponse>>> {
    let permissions = state
        .rbac_admin_service
        .permissions_for_role(RoleId::parse(role_id.as_str())?)
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(permissions))
}

pub async fn grant_permission_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<GrantPermissionRequest>,
) -> ApiResult<StatusCode> {
    require_admin(&state, &user).await?;

    let role_id = RoleId::parse(payload.role_id.as_str())?;
    let permission_id = PermissionId::parse(payload.permission_id.as_str())?;
    state
        .rbac_admin_service
        .grant_permission(role_id, permission_id)
        .await?;

    tracing::info!(actor = %user.user_id(), %role_id, %permission_id, "permission granted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn revoke_permission_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path((role_id, permission_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    require_admin(&state, &user).await?;

    let role_id = RoleId::parse(role_id.as_str())?;
    let permission_id = PermissionId::parse(permission_id.as_str())?;
    state
        .rbac_admin_service
        .revoke_permission(role_id, permission_id)
        .await?;

    tracing::info!(actor = %user.user_id(), %role_id, %permission_id, "permission revoked");
    Ok(StatusCode::NO_CONTENT)
}
