//! Permission resolution for authenticated users.
//!
//! Every decision reads the current assignment and grant ledgers; nothing is
//! cached, so a revoke or role removal is observed by the next check.

use std::sync::Arc;

use warden_core::{AppError, AppResult};
use warden_domain::{Capability, UserId};

use crate::{AssignmentRepository, AuthorizationRepository};


/// Application service answering "may this user perform this action on this resource".
#[derive(Clone)]
pub struct AuthorizationService {
    repository: Arc<dyn AuthorizationRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from repository implementations.
    #[must_use]
    pub fn new(
        repository: Arc<dyn AuthorizationRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
    ) -> Self {
        Self {
            repository,
            assignment_repository,
        }
    }

    /// Returns whether the user currently holds the exact `(resource, action)` capability.
    ///
    /// `Ok(false)` is a definite deny. Storage failures are returned as errors
    /// and must not be read as a deny by callers.
    pub async fn has_permission(
        &self,
        user_id: UserId,
        resource: &str,
        action: &str,
    ) -> AppResult<bool> {
        if resource.trim().is_empty() || action.trim().is_empty() {
            return Err(AppError::Validation(
                "resource and action must not be empty".to_owned(),
            ));
        }

        let capabilities = self.repository.list_capabilities_for_user(user_id).await?;

        Ok(capabilities
            .iter()
            .any(|capability| capability.matches(resource, action)))
    }

    /// Ensures the user holds the capability, failing with `Forbidden` otherwise.
    pub async fn require_permission(
        &self,
        user_id: UserId,
        resource: &str,
        action: &str,
    ) -> AppResult<()> {
        if self.has_permission(user_id, resource, action).await? {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "user '{user_id}' is missing permission '{resource}:{action}'"
        )))
    }

    /// Lists every capability the user currently holds, sorted and deduplicated.
    pub async fn effective_capabilities(&self, user_id: UserId) -> AppResult<Vec<Capability>> {
        let mut capabilities = self.repository.list_capabilities_for_user(user_id).await?;
        capabilities.sort();
        capabilities.dedup();
        Ok(capabilities)
    }

    /// Returns whether one of the user's roles carries the given name.
    pub async fn has_role(&self, user_id: UserId, role_name: &str) -> AppResult<bool> {
        let roles = self
            .assignment_repository
            .list_roles_for_user(user_id)
            .await?;

        Ok(roles.iter().any(|role| role.name().as_str() == role_name))
    }

    /// Ensures the user holds the named role, failing with `Forbidden` otherwise.
    pub async fn require_role(&self, user_id: UserId, role_name: &str) -> AppResult<()> {
        if self.has_role(user_id, role_name).await? {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "user '{user_id}' is missing role '{role_name}'"
        )))
    }
}
