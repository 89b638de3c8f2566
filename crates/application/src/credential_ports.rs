use async_trait::async_trait;
use chrono::{DateTime, Utc};

use warden_core::AppResult;
use warden_domain::{EmailAddress, NewUser, RoleId, User, UserId};

/// User record joined with its stored credential.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Public user projection.
    pub user: User,
    /// Argon2id password hash.
    pub password_hash: String,
}

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user and credential by canonical email.
    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<UserRecord>>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Creates a user and, when given, its initial role assignment.
    ///
    /// Runs as a single all-or-nothing unit: if the assignment cannot be
    /// recorded the user row must not persist. Fails with `Conflict` on a
    /// duplicate email and `NotFound` when the initial role does not exist.
    async fn create_user(
        &self,
        user: NewUser,
        password_hash: &str,
        initial_role_id: Option<RoleId>,
    ) -> AppResult<User>;
}

/// Port for password hashing operations. Keeps the application layer free
/// of direct cryptographic library coupling.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}

/// Claims carried by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// Subject of the token.
    pub user_id: UserId,
    /// Email at issuance time.
    pub email: String,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
}

/// Signed access token handed to a client after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Encoded token.
    pub token: String,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
}

/// Port for access token issuance and verification.
pub trait TokenService: Send + Sync {
    /// Issues a signed token for the user.
    fn issue_token(&self, user: &User) -> AppResult<IssuedToken>;

    /// Verifies signature and expiry and returns the claims.
    ///
    /// Fails with `Unauthorized` for any invalid token.
    fn decode_token(&self, token: &str) -> AppResult<AccessTokenClaims>;
}
