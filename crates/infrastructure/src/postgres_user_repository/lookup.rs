use super::*;

impl PostgresUserRepository {
    pub(super) async fn find_by_email_impl(
        &self,
        email: &EmailAddress,
    ) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, display_name, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Persistence(format!("failed to find user by email: {error}")))?;

        row.map(UserRecord::try_from).transpose()
    }

    pub(super) async fn find_by_id_impl(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, display_name, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Persistence(format!("failed to find user '{user_id}': {error}"))
        })?;

        Ok(row
            .map(UserRecord::try_from)
            .transpose()?
            .map(|record| record.user))
    }
}
