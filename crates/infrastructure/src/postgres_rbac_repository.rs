//! PostgreSQL-backed role registry, permission catalog and relation ledgers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use warden_application::{
    AssignmentRepository, GrantRepository, PermissionRepository, RoleRepository,
};
use warden_core::{AppError, AppResult};
use warden_domain::{
    Capability, NewPermission, NewRole, Permission, PermissionId, Role, RoleId, UserId,
};

mod assignments;
mod grants;
mod permissions;
mod roles;

#[cfg(test)]
mod tests;

/// PostgreSQL implementation of the role, permission, assignment and grant ports.
#[derive(Clone)]
pub struct PostgresRbacRepository {
    pool: PgPool,
}

impl PostgresRbacRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: Uuid,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<RoleRow> for Role {
    type Error = AppError;

    fn try_from(row: RoleRow) -> AppResult<Self> {
        Role::new(
            RoleId::from_uuid(row.id),
            row.name,
            row.description,
            row.created_at,
        )
        .map_err(|error| AppError::Internal(format!("failed to decode role '{}': {error}", row.id)))
    }
}

#[derive(Debug, FromRow)]
struct PermissionRow {
    id: Uuid,
    name: String,
    resource: String,
    action: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PermissionRow> for Permission {
    type Error = AppError;

    fn try_from(row: PermissionRow) -> AppResult<Self> {
        let decode_error = |error: AppError| {
            AppError::Internal(format!("failed to decode permission '{}': {error}", row.id))
        };
        let capability = Capability::new(row.resource, row.action).map_err(decode_error)?;

        Permission::new(
            PermissionId::from_uuid(row.id),
            row.name,
            capability,
            row.description,
            row.created_at,
        )
        .map_err(decode_error)
    }
}

fn decode_roles(rows: Vec<RoleRow>) -> AppResult<Vec<Role>> {
    rows.into_iter().map(Role::try_from).collect()
}

fn decode_permissions(rows: Vec<PermissionRow>) -> AppResult<Vec<Permission>> {
    rows.into_iter().map(Permission::try_from).collect()
}

fn is_violation(error: &sqlx::Error, code: &str) -> bool {
    matches!(error, sqlx::Error::Database(database_error) if database_error.code().as_deref() == Some(code))
}

fn role_conflict_or_persistence(error: sqlx::Error, name: &str) -> AppError {
    if is_violation(&error, "23505") {
        return AppError::Conflict(format!("role '{name}' already exists"));
    }

    AppError::Persistence(format!("failed to create role: {error}"))
}

fn missing_reference_or_persistence(error: sqlx::Error, operation: &str) -> AppError {
    if is_violation(&error, "23503") {
        return AppError::NotFound(format!("failed to {operation}: referenced row does not exist"));
    }

    AppError::Persistence(format!("failed to {operation}: {error}"))
}
