use super::*;

impl RbacAdminService {
    /// Assigns a role to a user. Assigning an already assigned role is a no-op.
    pub async fn assign_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        self.ensure_user_exists(user_id).await?;
        self.existing_role(role_id).await?;

        self.assignment_repository
            .assign_role(user_id, role_id)
            .await
    }

    /// Removes a role from a user. Removing an absent assignment is a no-op.
    pub async fn remove_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        self.assignment_repository
            .remove_role(user_id, role_id)
            .await
    }
}
