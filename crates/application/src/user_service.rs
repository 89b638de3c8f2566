//! Registration, login and token authentication.
//!
//! Password hashing and token signing sit behind ports; this service only
//! sequences them and keeps failure messages generic so responses do not
//! reveal whether an account exists.

use std::sync::Arc;

use warden_core::{AppError, AppResult, UserIdentity};
use warden_domain::{Role, RoleId, User, UserId};

use crate::{AssignmentRepository, IssuedToken, PasswordHasher, TokenService, UserRepository};

mod login;
mod registration;


/// Parameters for user registration.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    /// Email address for the new account.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub display_name: String,
    /// Role assigned in the same transaction as the user row, if any.
    pub initial_role_id: Option<RoleId>,
}

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed access token.
    pub token: IssuedToken,
    /// Authenticated user.
    pub user: User,
    /// Roles assigned at login time.
    pub roles: Vec<Role>,
}

/// Application service for user authentication and registration.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            assignment_repository,
            password_hasher,
            token_service,
        }
    }

    /// Verifies an access token and returns the identity it carries.
    pub fn authenticate_token(&self, token: &str) -> AppResult<UserIdentity> {
        let claims = self.token_service.decode_token(token)?;
        Ok(UserIdentity::new(claims.user_id.as_uuid(), claims.email))
    }

    /// Returns a registered user.
    pub async fn get_user(&self, user_id: UserId) -> AppResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' was not found")))
    }
}
