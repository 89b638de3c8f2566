//! Domain entities and invariants for flat role-based access control.

#![forbid(unsafe_code)]

mod permission;
mod role;
mod user;

pub use permission::{Capability, NewPermission, Permission, PermissionId};
pub use role::{NewRole, Role, RoleId};
pub use user::{
    EmailAddress, NewUser, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, User, UserId,
    validate_password,
};
