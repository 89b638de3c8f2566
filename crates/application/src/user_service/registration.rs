use warden_domain::{NewUser, validate_password};

use super::*;

impl UserService {
    /// Registers a new user with email and password.
    ///
    /// The user row and the optional initial role assignment are written
    /// atomically: if the assignment fails, no user is created.
    pub async fn register(&self, params: RegisterParams) -> AppResult<User> {
        let new_user = NewUser::new(params.email, params.display_name)?;
        validate_password(&params.password)?;

        if self
            .user_repository
            .find_by_email(new_user.email())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }

        let password_hash = self.password_hasher.hash_password(&params.password)?;

        self.user_repository
            .create_user(new_user, &password_hash, params.initial_role_id)
            .await
    }
}
