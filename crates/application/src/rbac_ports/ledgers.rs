use async_trait::async_trait;

use warden_core::AppResult;
use warden_domain::{Capability, Permission, PermissionId, Role, RoleId, UserId};

/// Repository port for the user to role relation.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Records the assignment. Existing assignments are left untouched.
    async fn assign_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()>;

    /// Deletes the assignment if present.
    async fn remove_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()>;

    /// Lists roles assigned to a user ordered by name.
    async fn list_roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>>;
}

/// Repository port for the role to permission relation.
#[async_trait]
pub trait GrantRepository: Send + Sync {
    /// Records the grant. Existing grants are left untouched.
    async fn grant_permission(&self, role_id: RoleId, permission_id: PermissionId)
    -> AppResult<()>;

    /// Deletes the grant if present.
    async fn revoke_permission(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> AppResult<()>;

    /// Lists permissions granted to a role ordered by resource, then action.
    async fn list_permissions_for_role(&self, role_id: RoleId) -> AppResult<Vec<Permission>>;
}

/// Repository port for permission resolution.
#[async_trait]
pub trait AuthorizationRepository: Send + Sync {
    /// Lists the distinct capabilities reachable from a user through
    /// assignments and grants, read from current ledger state.
    async fn list_capabilities_for_user(&self, user_id: UserId) -> AppResult<Vec<Capability>>;
}
