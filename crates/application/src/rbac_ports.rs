mod ledgers;
mod registries;

pub use ledgers::{AssignmentRepository, AuthorizationRepository, GrantRepository};
pub use registries::{PermissionRepository, RoleRepository};
