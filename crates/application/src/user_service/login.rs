use warden_domain::EmailAddress;

use super::*;

const INVALID_CREDENTIALS: &str = "invalid credentials";

impl UserService {
    /// Authenticates a user with email and password and issues an access token.
    ///
    /// Unknown emails, malformed emails and wrong passwords all fail with the
    /// same `Unauthorized` message.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let Ok(email) = EmailAddress::new(email) else {
            let _ = self.password_hasher.hash_password(password);
            return Err(invalid_credentials());
        };

        let Some(record) = self.user_repository.find_by_email(&email).await? else {
            // Hash anyway so unknown accounts take as long as known ones.
            let _ = self.password_hasher.hash_password(password);
            return Err(invalid_credentials());
        };

        if !self
            .password_hasher
            .verify_password(password, &record.password_hash)?
        {
            return Err(invalid_credentials());
        }

        let roles = self
            .assignment_repository
            .list_roles_for_user(record.user.id())
            .await?;
        let token = self.token_service.issue_token(&record.user)?;

        Ok(LoginOutcome {
            token,
            user: record.user,
            roles,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized(INVALID_CREDENTIALS.to_owned())
}
