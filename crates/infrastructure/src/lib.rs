//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_rbac_store;
mod jwt_token_service;
mod postgres_authorization_repository;
mod postgres_rbac_repository;
mod postgres_user_repository;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_rbac_store::InMemoryRbacStore;
pub use jwt_token_service::{JwtTokenService, MAX_TOKEN_TTL_HOURS, MIN_SECRET_LENGTH};
pub use postgres_authorization_repository::PostgresAuthorizationRepository;
pub use postgres_rbac_repository::PostgresRbacRepository;
pub use postgres_user_repository::PostgresUserRepository;
