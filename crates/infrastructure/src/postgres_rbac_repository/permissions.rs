use super::*;

#[async_trait]
impl PermissionRepository for PostgresRbacRepository {
    async fn create_permission(&self, permission: NewPermission) -> AppResult<Permission> {
        let row = sqlx::query_as::<_, PermissionRow>(
            r#"
            INSERT INTO permissions (name, resource, action, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, resource, action, description, created_at
            "#,
        )
        .bind(permission.name().as_str())
        .bind(permission.capability().resource())
        .bind(permission.capability().action())
        .bind(permission.description())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Persistence(format!("failed to create permission: {error}")))?;

        Permission::try_from(row)
    }

    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, PermissionRow>(
            r#"
            SELECT id, name, resource, action, description, created_at
            FROM permissions
            ORDER BY resource COLLATE "C", action COLLATE "C", name COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Persistence(format!("failed to list permissions: {error}")))?;

        decode_permissions(rows)
    }

    async fn find_permission(
        &self,
        permission_id: PermissionId,
    ) -> AppResult<Option<Permission>> {
        let row = sqlx::query_as::<_, PermissionRow>(
            r#"
            SELECT id, name, resource, action, description, created_at
            FROM permissions
            WHERE id = $1
            "#,
        )
        .bind(permission_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Persistence(format!(
                "failed to find permission '{permission_id}': {error}"
            ))
        })?;

        row.map(Permission::try_from).transpose()
    }

    async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM permissions
            WHERE id = $1
            "#,
        )
        .bind(permission_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Persistence(format!(
                "failed to delete permission '{permission_id}': {error}"
            ))
        })?;

        Ok(result.rows_affected() > 0)
    }
}
