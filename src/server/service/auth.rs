//! Username/password authentication.
//!
//! The service only verifies credentials and manages password hashes; storing the
//! resulting user ID in the session is left to the controller.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{mentee::MenteeRepository, mentor::MentorRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{role::Role, user::User},
    util::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Cost factor used when re-hashing a changed password
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Verifies a username and password.
    ///
    /// Unknown usernames and wrong passwords produce the same error. Mentor and mentee
    /// accounts must also be active.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::AuthErr(AccountInactive))` - Mentor or mentee has been deactivated
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(entity) = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &entity.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(entity)?;

        let active = match user.role {
            Role::Admin => true,
            Role::Mentor => MentorRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?
                .is_some_and(|mentor| mentor.active),
            Role::Mentee => MenteeRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?
                .is_some_and(|mentee| mentee.active),
        };
        if !active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        tracing::info!("User {} ({}) logged in", user.id, user.role);

        Ok(user)
    }

    /// Changes a user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::BadRequest)` - New password shorter than the minimum
    /// - `Err(AppError::AuthErr(IncorrectPassword))` - Current password is wrong
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User no longer exists
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "New password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        if !verify_password(current_password, &user.password_hash) {
            return Err(AuthError::IncorrectPassword(user_id).into());
        }

        let hash = hash_password(new_password, self.bcrypt_cost)?;
        repo.update_password(user_id, hash).await?;

        Ok(())
    }
}
