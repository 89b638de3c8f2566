use warden_domain::NewPermission;

use super::*;

impl RbacAdminService {
    /// Adds a permission to the catalog.
    ///
    /// `(resource, action)` pairs are not required to be unique.
    pub async fn create_permission(&self, input: CreatePermissionInput) -> AppResult<Permission> {
        let permission = NewPermission::new(
            input.name,
            input.resource,
            input.action,
            input.description,
        )?;
        self.permission_repository
            .create_permission(permission)
            .await
    }

    /// Lists the catalog ordered by resource, then action.
    pub async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        self.permission_repository.list_permissions().await
    }

    /// Returns one permission.
    pub async fn get_permission(&self, permission_id: PermissionId) -> AppResult<Permission> {
        self.existing_permission(permission_id).await
    }

    /// Lists permissions granted to a role.
    ///
    /// An unknown role is treated like a role without grants.
    pub async fn permissions_for_role(&self, role_id: RoleId) -> AppResult<Vec<Permission>> {
        self.grant_repository.list_permissions_for_role(role_id).await
    }

    /// Deletes a permission and cascades its grants.
    pub async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<()> {
        if self
            .permission_repository
            .delete_permission(permission_id)
            .await?
        {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "permission '{permission_id}' was not found"
            )))
        }
    }
}
