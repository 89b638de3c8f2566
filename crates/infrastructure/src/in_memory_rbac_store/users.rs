use super::*;

#[async_trait]
impl UserRepository for InMemoryRbacStore {
    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<UserRecord>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|record| record.user.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .get(&user_id)
            .map(|record| record.user.clone()))
    }

    async fn create_user(
        &self,
        user: NewUser,
        password_hash: &str,
        initial_role_id: Option<RoleId>,
    ) -> AppResult<User> {
        let mut state = self.state.write().await;

        if state
            .users
            .values()
            .any(|record| record.user.email() == user.email())
        {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }
        // Validate everything before the first write so a failure leaves no trace.
        if let Some(role_id) = initial_role_id
            && !state.roles.contains_key(&role_id)
        {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        let now = Utc::now();
        let created = User::new(
            UserId::new(),
            user.email().clone(),
            user.display_name().clone(),
            now,
            now,
        );
        state.users.insert(
            created.id(),
            UserRecord {
                user: created.clone(),
                password_hash: password_hash.to_owned(),
            },
        );
        if let Some(role_id) = initial_role_id {
            state.user_roles.insert((created.id(), role_id));
        }

        Ok(created)
    }
}
