use std::sync::Arc;

use sqlx::PgPool;
use warden_application::{AuthorizationService, RbacAdminService, UserService};
use warden_core::AppError;
use warden_infrastructure::{
    Argon2PasswordHasher, JwtTokenService, PostgresAuthorizationRepository,
    PostgresRbacRepository, PostgresUserRepository,
};

use crate::api_config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub rbac_admin_service: RbacAdminService,
    pub authorization_service: AuthorizationService,
    pub user_service: UserService,
    pub admin_role_name: String,
    pub postgres_pool: Option<PgPool>,
}

impl AppState {
    pub fn postgres(pool: PgPool, config: &ApiConfig) -> Result<Self, AppError> {
        let rbac_repository = Arc::new(PostgresRbacRepository::new(pool.clone()));
        let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
        let authorization_repository = Arc::new(PostgresAuthorizationRepository::new(pool.clone()));
        let token_service = Arc::new(JwtTokenService::new(
            config.jwt_secret.as_str(),
            config.token_ttl,
        )?);

        Ok(Self {
            rbac_admin_service: RbacAdminService::new(
                rbac_repository.clone(),
                rbac_repository.clone(),
                rbac_repository.clone(),
                rbac_repository.clone(),
                user_repository.clone(),
            ),
            authorization_service: AuthorizationService::new(
                authorization_repository,
                rbac_repository.clone(),
            ),
            user_service: UserService::new(
                user_repository,
                rbac_repository,
                Arc::new(Argon2PasswordHasher::new()),
                token_service,
            ),
            admin_role_name: config.admin_role_name.clone(),
            postgres_pool: Some(pool),
        })
    }

    #[cfg(test)]
    pub fn in_memory(
        store: Arc<warden_infrastructure::InMemoryRbacStore>,
        token_service: Arc<JwtTokenService>,
    ) -> Self {
        Self {
            rbac_admin_service: RbacAdminService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
            ),
            authorization_service: AuthorizationService::new(store.clone(), store.clone()),
            user_service: UserService::new(
                store.clone(),
                store,
                Arc::new(Argon2PasswordHasher::new()),
                token_service,
            ),
            admin_role_name: "admin".to_owned(),
            postgres_pool: None,
        }
    }
}
