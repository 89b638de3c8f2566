use super::*;

#[async_trait]
impl AssignmentRepository for PostgresRbacRepository {
    async fn assign_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, role_id) DO NOTHING
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(role_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| missing_reference_or_persistence(error, "assign role"))?;

        Ok(())
    }

    async fn remove_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        sqlx::query(
            r#"
            DELETE FROM user_roles
            WHERE user_id = $1 AND role_id = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(role_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Persistence(format!("failed to remove role: {error}")))?;

        Ok(())
    }

    async fn list_roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT roles.id, roles.name, roles.description, roles.created_at
            FROM user_roles
            INNER JOIN roles ON roles.id = user_roles.role_id
            WHERE user_roles.user_id = $1
            ORDER BY roles.name COLLATE "C"
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Persistence(format!("failed to list roles for user '{user_id}': {error}"))
        })?;

        decode_roles(rows)
    }
}
