use axum::Json;
use axum::extract::{Extension, Query, State};
use warden_core::UserIdentity;
use warden_domain::UserId;

use crate::dto::{AuthorizationDecisionResponse, AuthorizeQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn authorize_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Query(query): Query<AuthorizeQuery>,
) -> ApiResult<Json<AuthorizationDecisionResponse>> {
    let allowed = state
        .authorization_service
        .has_permission(
            UserId::from_uuid(user.user_id()),
            query.resource.as_str(),
            query.action.as_str(),
        )
        .await?;

    Ok(Json(AuthorizationDecisionResponse {
        resource: query.resource,
        action: query.action,
        allowed,
    }))
}
