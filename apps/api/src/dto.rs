mod auth;
mod common;
mod rbac;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use common::{HealthDependencyStatus, HealthResponse, MessageResponse};
pub use rbac::{
    AssignRoleRequest, AuthorizationDecisionResponse, AuthorizeQuery, CreatePermissionRequest,
    CreateRoleRequest, GrantPermissionRequest, PermissionResponse, RoleResponse,
};
