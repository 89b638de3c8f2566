use super::*;

impl RbacAdminService {
    /// Grants a permission to a role. Granting twice is a no-op.
    pub async fn grant_permission(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> AppResult<()> {
        self.existing_role(role_id).await?;
        self.existing_permission(permission_id).await?;

        self.grant_repository
            .grant_permission(role_id, permission_id)
            .await
    }

    /// Revokes a permission from a role. Revoking an absent grant is a no-op.
    pub async fn revoke_permission(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> AppResult<()> {
        self.grant_repository
            .revoke_permission(role_id, permission_id)
            .await
    }
}
