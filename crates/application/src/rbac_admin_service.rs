//! Administration of roles, permissions and the relations between them.
//!
//! Groups the role registry, the permission catalog, and the assignment and
//! grant ledgers behind one service. Relationship writes check that both
//! endpoints exist and fail with `NotFound` otherwise; inserts and deletes on
//! the ledgers are idempotent.

use std::sync::Arc;

use warden_core::{AppError, AppResult};
use warden_domain::{Permission, PermissionId, Role, RoleId, UserId};

use crate::{
    AssignmentRepository, GrantRepository, PermissionRepository, RoleRepository, UserRepository,
};

mod assignments;
mod grants;
mod permissions;
mod roles;


/// Input payload for creating roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleInput {
    /// Unique role name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// Input payload for creating permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePermissionInput {
    /// Human label.
    pub name: String,
    /// Resource tag.
    pub resource: String,
    /// Action tag.
    pub action: String,
    /// Free-form description.
    pub description: String,
}

/// Application service for RBAC administration workflows.
#[derive(Clone)]
pub struct RbacAdminService {
    role_repository: Arc<dyn RoleRepository>,
    permission_repository: Arc<dyn PermissionRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    grant_repository: Arc<dyn GrantRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl RbacAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        role_repository: Arc<dyn RoleRepository>,
        permission_repository: Arc<dyn PermissionRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
        grant_repository: Arc<dyn GrantRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            role_repository,
            permission_repository,
            assignment_repository,
            grant_repository,
            user_repository,
        }
    }

    async fn existing_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.role_repository
            .find_role(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' was not found")))
    }

    async fn existing_permission(&self, permission_id: PermissionId) -> AppResult<Permission> {
        self.permission_repository
            .find_permission(permission_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("permission '{permission_id}' was not found"))
            })
    }

    async fn ensure_user_exists(&self, user_id: UserId) -> AppResult<()> {
        match self.user_repository.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("user '{user_id}' was not found"))),
        }
    }
}
