//! HS256 access tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use warden_application::{AccessTokenClaims, IssuedToken, TokenService};
use warden_core::{AppError, AppResult};
use warden_domain::{User, UserId};

/// Minimum accepted signing secret length in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Longest accepted access token lifetime in hours.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies HS256 JSON Web Tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtTokenService {
    /// Creates a token service.
    ///
    /// Fails with `Validation` when the secret is shorter than
    /// [`MIN_SECRET_LENGTH`] or the lifetime is not within
    /// `1..=MAX_TOKEN_TTL_HOURS` hours.
    pub fn new(secret: &str, ttl: Duration) -> AppResult<Self> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::Validation(format!(
                "token signing secret must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }
        if ttl <= Duration::zero() || ttl > Duration::hours(MAX_TOKEN_TTL_HOURS) {
            return Err(AppError::Validation(format!(
                "token lifetime must be positive and at most {MAX_TOKEN_TTL_HOURS} hours"
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }
}

impl TokenService for JwtTokenService {
    fn issue_token(&self, user: &User) -> AppResult<IssuedToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::Internal("access token expiry is out of range".to_owned())
        })?;
        let claims = Claims {
            sub: user.id().to_string(),
            email: user.email().as_str().to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|error| AppError::Internal(format!("failed to sign access token: {error}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    fn decode_token(&self, token: &str) -> AppResult<AccessTokenClaims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |error| {
                tracing::debug!(error = %error, "rejected access token");
                match error.kind() {
                    ErrorKind::ExpiredSignature => {
                        AppError::Unauthorized("access token has expired".to_owned())
                    }
                    _ => AppError::Unauthorized("invalid access token".to_owned()),
                }
            },
        )?;

        let user_id = UserId::parse(data.claims.sub.as_str())
            .map_err(|_| AppError::Unauthorized("invalid access token subject".to_owned()))?;
        let expires_at: DateTime<Utc> = DateTime::from_timestamp(data.claims.exp, 0)
            .ok_or_else(|| AppError::Unauthorized("invalid access token expiry".to_owned()))?;

        Ok(AccessTokenClaims {
            user_id,
            email: data.claims.email,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    use warden_application::TokenService;
    use warden_core::{AppError, NonEmptyString};
    use warden_domain::{EmailAddress, User, UserId};

    use super::{Claims, JwtTokenService, MAX_TOKEN_TTL_HOURS};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn user() -> User {
        let email = EmailAddress::new("ada@example.com").unwrap_or_else(|_| panic!("test"));
        let display_name = NonEmptyString::new("Ada").unwrap_or_else(|_| panic!("test"));
        User::new(UserId::new(), email, display_name, Utc::now(), Utc::now())
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(SECRET, Duration::hours(24)).unwrap_or_else(|_| panic!("test"))
    }

    #[test]
    fn issued_token_decodes_to_same_subject() {
        let service = service();
        let user = user();

        let issued = service.issue_token(&user);
        assert!(issued.is_ok());
        let issued = issued.unwrap_or_else(|_| panic!("test"));
        let claims = service.decode_token(issued.token.as_str());

        assert!(claims.is_ok());
        let claims = claims.unwrap_or_else(|_| panic!("test"));
        assert_eq!(claims.user_id, user.id());
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.expires_at.timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new("ffffffffffffffffffffffffffffffff", Duration::hours(1))
            .unwrap_or_else(|_| panic!("test"));
        let issued = other
            .issue_token(&user())
            .unwrap_or_else(|_| panic!("test"));

        assert!(matches!(
            service().decode_token(issued.token.as_str()),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        let claims = Claims {
            sub: UserId::new().to_string(),
            email: "ada@example.com".to_owned(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap_or_else(|_| panic!("test"));

        let result = service().decode_token(token.as_str());

        assert!(matches!(result, Err(AppError::Unauthorized(message)) if message.contains("expired")));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            service().decode_token("not.a.token"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn short_secret_is_rejected() {
        assert!(matches!(
            JwtTokenService::new("short", Duration::hours(1)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn lifetime_outside_bounds_is_rejected() {
        for ttl in [
            Duration::zero(),
            Duration::hours(MAX_TOKEN_TTL_HOURS + 1),
            Duration::hours(3_000_000_000),
        ] {
            assert!(matches!(
                JwtTokenService::new(SECRET, ttl),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn longest_lifetime_still_issues_tokens() {
        let service = JwtTokenService::new(SECRET, Duration::hours(MAX_TOKEN_TTL_HOURS))
            .unwrap_or_else(|_| panic!("test"));

        let issued = service.issue_token(&user());

        assert!(issued.is_ok_and(|issued| issued.expires_at > Utc::now()));
    }
}
