use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use warden_core::{AppError, AppResult, UserIdentity};
use warden_domain::UserId;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;
    let identity = state.user_service.authenticate_token(token)?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Allows the request only when the caller holds the configured admin role.
pub async fn require_admin(state: &AppState, user: &UserIdentity) -> ApiResult<()> {
    let outcome = state
        .authorization_service
        .require_role(
            UserId::from_uuid(user.user_id()),
            state.admin_role_name.as_str(),
        )
        .await;

    gate(outcome, user, format!("role '{}'", state.admin_role_name))
}

/// Allows the request only when the caller holds the exact capability.
pub async fn require_capability(
    state: &AppState,
    user: &UserIdentity,
    resource: &str,
    action: &str,
) -> ApiResult<()> {
    let outcome = state
        .authorization_service
        .require_permission(UserId::from_uuid(user.user_id()), resource, action)
        .await;

    gate(outcome, user, format!("permission '{resource}:{action}'"))
}

fn gate(outcome: AppResult<()>, user: &UserIdentity, requirement: String) -> ApiResult<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(AppError::Forbidden(message)) => {
            tracing::debug!(user_id = %user.user_id(), %requirement, "access denied");
            Err(AppError::Forbidden(message).into())
        }
        Err(error) => {
            // Fail closed: the request is refused without a decision.
            tracing::error!(
                user_id = %user.user_id(),
                %requirement,
                error = %error,
                "authorization check failed"
            );
            Err(error.into())
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
