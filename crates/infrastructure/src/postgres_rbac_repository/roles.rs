use super::*;

#[async_trait]
impl RoleRepository for PostgresRbacRepository {
    async fn create_role(&self, role: NewRole) -> AppResult<Role> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            INSERT INTO roles (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(role.name().as_str())
        .bind(role.description())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| role_conflict_or_persistence(error, role.name().as_str()))?;

        Role::try_from(row)
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description, created_at
            FROM roles
            ORDER BY name COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Persistence(format!("failed to list roles: {error}")))?;

        decode_roles(rows)
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description, created_at
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Persistence(format!("failed to find role '{role_id}': {error}"))
        })?;

        row.map(Role::try_from).transpose()
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Persistence(format!("failed to delete role '{role_id}': {error}"))
        })?;

        Ok(result.rows_affected() > 0)
    }
}
