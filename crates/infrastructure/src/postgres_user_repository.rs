//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use warden_application::{UserRecord, UserRepository};
use warden_core::{AppError, AppResult, NonEmptyString};
use warden_domain::{EmailAddress, NewUser, RoleId, User, UserId};

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    display_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AppError;

    fn try_from(row: UserRow) -> AppResult<Self> {
        let decode_error = |error: AppError| {
            AppError::Internal(format!("failed to decode user '{}': {error}", row.id))
        };
        let email = EmailAddress::new(row.email).map_err(decode_error)?;
        let display_name = NonEmptyString::new(row.display_name).map_err(decode_error)?;

        Ok(Self {
            user: User::new(
                UserId::from_uuid(row.id),
                email,
                display_name,
                row.created_at,
                row.updated_at,
            ),
            password_hash: row.password_hash,
        })
    }
}

mod account;
mod lookup;


#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<UserRecord>> {
        self.find_by_email_impl(email).await
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        self.find_by_id_impl(user_id).await
    }

    async fn create_user(
        &self,
        user: NewUser,
        password_hash: &str,
        initial_role_id: Option<RoleId>,
    ) -> AppResult<User> {
        self.create_impl(user, password_hash, initial_role_id).await
    }
}

fn email_conflict_or_persistence(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict("an account with this email already exists".to_owned());
    }

    AppError::Persistence(format!("failed to {operation}: {error}"))
}
