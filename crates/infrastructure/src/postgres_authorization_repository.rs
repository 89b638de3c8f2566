use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use warden_application::AuthorizationRepository;
use warden_core::{AppError, AppResult};
use warden_domain::{Capability, UserId};

/// PostgreSQL-backed repository for user capability lookups.
#[derive(Clone)]
pub struct PostgresAuthorizationRepository {
    pool: PgPool,
}

impl PostgresAuthorizationRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CapabilityRow {
    resource: String,
    action: String,
}

#[async_trait]
impl AuthorizationRepository for PostgresAuthorizationRepository {
    async fn list_capabilities_for_user(&self, user_id: UserId) -> AppResult<Vec<Capability>> {
        let rows = sqlx::query_as::<_, CapabilityRow>(
            r#"
            SELECT DISTINCT permissions.resource, permissions.action
            FROM user_roles
            INNER JOIN role_permissions
                ON role_permissions.role_id = user_roles.role_id
            INNER JOIN permissions
                ON permissions.id = role_permissions.permission_id
            WHERE user_roles.user_id = $1
            ORDER BY permissions.resource COLLATE "C", permissions.action COLLATE "C"
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Persistence(format!(
                "failed to load capabilities for user '{user_id}': {error}"
            ))
        })?;

        rows.into_iter()
            .map(|row| {
                Capability::new(row.resource.as_str(), row.action.as_str()).map_err(|error| {
                    AppError::Internal(format!(
                        "failed to decode capability '{}:{}' for user '{user_id}': {error}",
                        row.resource, row.action
                    ))
                })
            })
            .collect()
    }
}
