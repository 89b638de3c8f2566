use async_trait::async_trait;

use warden_core::AppResult;
use warden_domain::{NewPermission, NewRole, Permission, PermissionId, Role, RoleId};

/// Repository port for role definitions.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Persists a new role and returns it with its server-assigned id and timestamp.
    ///
    /// Fails with `Conflict` when the name is already taken.
    async fn create_role(&self, role: NewRole) -> AppResult<Role>;

    /// Lists all roles ordered by name.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Finds a role by identifier.
    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Deletes a role together with its assignments and grants.
    ///
    /// Returns whether a role was removed.
    async fn delete_role(&self, role_id: RoleId) -> AppResult<bool>;
}

/// Repository port for the permission catalog.
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Persists a new permission and returns it with its server-assigned id and timestamp.
    async fn create_permission(&self, permission: NewPermission) -> AppResult<Permission>;

    /// Lists all permissions ordered by resource, then action.
    async fn list_permissions(&self) -> AppResult<Vec<Permission>>;

    /// Finds a permission by identifier.
    async fn find_permission(&self, permission_id: PermissionId)
    -> AppResult<Option<Permission>>;

    /// Deletes a permission together with its grants.
    ///
    /// Returns whether a permission was removed.
    async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<bool>;
}
