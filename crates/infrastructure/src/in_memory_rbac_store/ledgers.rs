use super::*;

#[async_trait]
impl AssignmentRepository for InMemoryRbacStore {
    async fn assign_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&user_id) {
            return Err(AppError::NotFound(format!("user '{user_id}' was not found")));
        }
        if !state.roles.contains_key(&role_id) {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        state.user_roles.insert((user_id, role_id));
        Ok(())
    }

    async fn remove_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        self.state
            .write()
            .await
            .user_roles
            .remove(&(user_id, role_id));
        Ok(())
    }

    async fn list_roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>> {
        let state = self.state.read().await;

        let mut roles: Vec<Role> = state
            .user_roles
            .iter()
            .filter(|(assigned_user_id, _)| assigned_user_id == &user_id)
            .filter_map(|(_, role_id)| state.roles.get(role_id).cloned())
            .collect();
        sort_roles(&mut roles);
        Ok(roles)
    }
}

#[async_trait]
impl GrantRepository for InMemoryRbacStore {
    async fn grant_permission(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;

        if !state.roles.contains_key(&role_id) {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }
        if !state.permissions.contains_key(&permission_id) {
            return Err(AppError::NotFound(format!(
                "permission '{permission_id}' was not found"
            )));
        }

        state.role_permissions.insert((role_id, permission_id));
        Ok(())
    }

    async fn revoke_permission(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> AppResult<()> {
        self.state
            .write()
            .await
            .role_permissions
            .remove(&(role_id, permission_id));
        Ok(())
    }

    async fn list_permissions_for_role(&self, role_id: RoleId) -> AppResult<Vec<Permission>> {
        let state = self.state.read().await;

        let mut permissions: Vec<Permission> = state
            .role_permissions
            .iter()
            .filter(|(granted_role_id, _)| granted_role_id == &role_id)
            .filter_map(|(_, permission_id)| state.permissions.get(permission_id).cloned())
            .collect();
        sort_permissions(&mut permissions);
        Ok(permissions)
    }
}

#[async_trait]
impl AuthorizationRepository for InMemoryRbacStore {
    async fn list_capabilities_for_user(&self, user_id: UserId) -> AppResult<Vec<Capability>> {
        let guard = self.state.read().await;
        let state: &RbacState = &guard;

        let capabilities: BTreeSet<Capability> = state
            .user_roles
            .iter()
            .filter(|(assigned_user_id, _)| assigned_user_id == &user_id)
            .flat_map(|(_, role_id)| {
                state
                    .role_permissions
                    .iter()
                    .filter(move |(granted_role_id, _)| granted_role_id == role_id)
            })
            .filter_map(|(_, permission_id)| state.permissions.get(permission_id))
            .map(|permission| permission.capability().clone())
            .collect();

        Ok(capabilities.into_iter().collect())
    }
}
