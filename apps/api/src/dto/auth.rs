use serde::{Deserialize, Serialize};
use warden_application::LoginOutcome;
use warden_domain::User;

use super::rbac::RoleResponse;

/// Incoming payload for account registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub role_id: Option<String>,
}

/// Incoming payload for password login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// API representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            user_id: value.id().to_string(),
            email: value.email().as_str().to_owned(),
            display_name: value.display_name().as_str().to_owned(),
            created_at: value.created_at().to_rfc3339(),
            updated_at: value.updated_at().to_rfc3339(),
        }
    }
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_at: String,
    pub user: UserResponse,
    pub roles: Vec<RoleResponse>,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(value: LoginOutcome) -> Self {
        Self {
            token: value.token.token,
            token_type: "Bearer",
            expires_at: value.token.expires_at.to_rfc3339(),
            user: UserResponse::from(value.user),
            roles: value.roles.into_iter().map(RoleResponse::from).collect(),
        }
    }
}
