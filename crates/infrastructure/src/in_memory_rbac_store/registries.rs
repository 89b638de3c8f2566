use super::*;

#[async_trait]
impl RoleRepository for InMemoryRbacStore {
    async fn create_role(&self, role: NewRole) -> AppResult<Role> {
        let mut state = self.state.write().await;

        if state
            .roles
            .values()
            .any(|existing| existing.name() == role.name())
        {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                role.name().as_str()
            )));
        }

        let created = Role::new(
            RoleId::new(),
            role.name().as_str(),
            role.description(),
            Utc::now(),
        )?;
        state.roles.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.state.read().await.roles.values().cloned().collect();
        sort_roles(&mut roles);
        Ok(roles)
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.state.read().await.roles.get(&role_id).cloned())
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<bool> {
        let mut state = self.state.write().await;

        if state.roles.remove(&role_id).is_none() {
            return Ok(false);
        }
        state
            .user_roles
            .retain(|(_, assigned_role_id)| assigned_role_id != &role_id);
        state
            .role_permissions
            .retain(|(granted_role_id, _)| granted_role_id != &role_id);
        Ok(true)
    }
}

#[async_trait]
impl PermissionRepository for InMemoryRbacStore {
    async fn create_permission(&self, permission: NewPermission) -> AppResult<Permission> {
        let created = Permission::new(
            PermissionId::new(),
            permission.name().as_str(),
            permission.capability().clone(),
            permission.description(),
            Utc::now(),
        )?;

        self.state
            .write()
            .await
            .permissions
            .insert(created.id(), created.clone());
        Ok(created)
    }

    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        let mut permissions: Vec<Permission> = self
            .state
            .read()
            .await
            .permissions
            .values()
            .cloned()
            .collect();
        sort_permissions(&mut permissions);
        Ok(permissions)
    }

    async fn find_permission(
        &self,
        permission_id: PermissionId,
    ) -> AppResult<Option<Permission>> {
        Ok(self
            .state
            .read()
            .await
            .permissions
            .get(&permission_id)
            .cloned())
    }

    async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<bool> {
        let mut state = self.state.write().await;

        if state.permissions.remove(&permission_id).is_none() {
            return Ok(false);
        }
        state
            .role_permissions
            .retain(|(_, granted_permission_id)| granted_permission_id != &permission_id);
        Ok(true)
    }
}
