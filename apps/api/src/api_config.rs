use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use chrono::Duration;
use tracing_subscriber::EnvFilter;
use warden_core::AppError;
use warden_infrastructure::{MAX_TOKEN_TTL_HOURS, MIN_SECRET_LENGTH};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub admin_role_name: String,
    pub api_host: String,
    pub api_port: u16,
    pub cors_allowed_origin: Option<String>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    fn from_lookup(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::Validation(format!("{name} is required")))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::Validation(format!(
                "JWT_SECRET must be at least {MIN_SECRET_LENGTH} characters"
            )));
        }

        let token_ttl_hours = parse_or("TOKEN_TTL_HOURS", optional("TOKEN_TTL_HOURS"), 24_i64)?;
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&token_ttl_hours) {
            return Err(AppError::Validation(format!(
                "TOKEN_TTL_HOURS must be between 1 and {MAX_TOKEN_TTL_HOURS}"
            )));
        }

        Ok(Self {
            migrate_only,
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                optional("DATABASE_MAX_CONNECTIONS"),
                10_u32,
            )?,
            jwt_secret,
            token_ttl: Duration::hours(token_ttl_hours),
            admin_role_name: optional("ADMIN_ROLE_NAME")
                .map(|value| value.trim().to_owned())
                .unwrap_or_else(|| "admin".to_owned()),
            api_host: optional("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            api_port: parse_or("API_PORT", optional("API_PORT"), 8080_u16)?,
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}
