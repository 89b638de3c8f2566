use super::*;

impl PostgresUserRepository {
    pub(super) async fn create_impl(
        &self,
        user: NewUser,
        password_hash: &str,
        initial_role_id: Option<RoleId>,
    ) -> AppResult<User> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Persistence(format!("failed to begin registration transaction: {error}"))
        })?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, display_name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, display_name, password_hash, created_at, updated_at
            "#,
        )
        .bind(user.email().as_str())
        .bind(user.display_name().as_str())
        .bind(password_hash)
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| email_conflict_or_persistence(error, "create user"))?;

        if let Some(role_id) = initial_role_id {
            // Dropping the transaction on the error path rolls back the user row.
            let assigned = sqlx::query(
                r#"
                INSERT INTO user_roles (user_id, role_id)
                SELECT $1, roles.id
                FROM roles
                WHERE roles.id = $2
                ON CONFLICT (user_id, role_id) DO NOTHING
                "#,
            )
            .bind(row.id)
            .bind(role_id.as_uuid())
            .execute(&mut *transaction)
            .await
            .map_err(|error| {
                AppError::Persistence(format!("failed to assign initial role: {error}"))
            })?;

            if assigned.rows_affected() == 0 {
                tracing::warn!(%role_id, "initial role missing, rolling back registration");
                return Err(AppError::NotFound(format!(
                    "role '{role_id}' was not found"
                )));
            }
        }

        let record = UserRecord::try_from(row)?;

        transaction.commit().await.map_err(|error| {
            AppError::Persistence(format!("failed to commit registration transaction: {error}"))
        })?;

        Ok(record.user)
    }
}
