use warden_domain::NewRole;

use super::*;

impl RbacAdminService {
    /// Creates a role. Duplicate names fail with `Conflict`.
    pub async fn create_role(&self, input: CreateRoleInput) -> AppResult<Role> {
        let role = NewRole::new(input.name, input.description)?;
        self.role_repository.create_role(role).await
    }

    /// Lists all roles ordered by name.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.role_repository.list_roles().await
    }

    /// Returns one role.
    pub async fn get_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.existing_role(role_id).await
    }

    /// Lists roles assigned to a user. A user without roles yields an empty list.
    pub async fn roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>> {
        self.assignment_repository.list_roles_for_user(user_id).await
    }

    /// Deletes a role and cascades its assignments and grants.
    pub async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        if self.role_repository.delete_role(role_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("role '{role_id}' was not found")))
        }
    }
}
