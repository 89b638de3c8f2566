//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod credential_ports;
mod rbac_admin_service;
mod rbac_ports;
mod user_service;

pub use authorization_service::AuthorizationService;
pub use credential_ports::{
    AccessTokenClaims, IssuedToken, PasswordHasher, TokenService, UserRecord, UserRepository,
};
pub use rbac_admin_service::{CreatePermissionInput, CreateRoleInput, RbacAdminService};
pub use rbac_ports::{
    AssignmentRepository, AuthorizationRepository, GrantRepository, PermissionRepository,
    RoleRepository,
};
pub use user_service::{LoginOutcome, RegisterParams, UserService};
