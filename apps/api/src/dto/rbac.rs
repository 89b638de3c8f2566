use serde::{Deserialize, Serialize};
use warden_domain::{Permission, Role};

/// Incoming payload for role creation.
#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// API representation of a role.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role_id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            role_id: value.id().to_string(),
            name: value.name().as_str().to_owned(),
            description: value.description().to_owned(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Incoming payload for permission creation.
#[derive(Debug, Deserialize)]
pub struct CreatePermissionRequest {
    pub name: String,
    pub resource: String,
    pub action: String,
    #[serde(default)]
    pub description: String,
}

/// API representation of a permission.
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    pub permission_id: String,
    pub name: String,
    pub resource: String,
    pub action: String,
    pub description: String,
    pub created_at: String,
}

impl From<Permission> for PermissionResponse {
    fn from(value: Permission) -> Self {
        Self {
            permission_id: value.id().to_string(),
            name: value.name().as_str().to_owned(),
            resource: value.capability().resource().to_owned(),
            action: value.capability().action().to_owned(),
            description: value.description().to_owned(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Incoming payload for assigning a role to a user.
#[derive(Debug, Deserialize)]
pub struct AssignRoleRequest {
    pub user_id: String,
    pub role_id: String,
}

/// Incoming payload for granting a permission to a role.
#[derive(Debug, Deserialize)]
pub struct GrantPermissionRequest {
    pub role_id: String,
    pub permission_id: String,
}

/// Query parameters of a self authorization check.
#[derive(Debug, Deserialize)]
pub struct AuthorizeQuery {
    pub resource: String,
    pub action: String,
}

/// Result of a self authorization check.
#[derive(Debug, Serialize)]
pub struct AuthorizationDecisionResponse {
    pub resource: String,
    pub action: String,
    pub allowed: bool,
}
