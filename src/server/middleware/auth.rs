use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{mentee::MenteeRepository, mentor::MentorRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{role::Role, user::User},
};

/// A requirement checked by [`AuthGuard::require`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Mentor,
    Mentee,
    /// Admin or mentor.
    StaffOrAdmin,
    /// Caller is the current mentor of the given mentee. Admins always pass.
    MentorOf(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user was deleted (401)
    /// - `Err(AuthError::AccessDenied)` - A permission failed (403)
    /// - `Err(AppError::NotFound)` - `MentorOf` names a mentee that doesn't exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = User::from_entity(user)?;

        for permission in permissions {
            self.check(&user, *permission).await?;
        }

        Ok(user)
    }

    async fn check(&self, user: &User, permission: Permission) -> Result<(), AppError> {
        let denied =
            |action: String| -> AppError { AuthError::AccessDenied(user.id, action).into() };

        match permission {
            Permission::Admin if user.role != Role::Admin => {
                Err(denied("admin access required".to_string()))
            }
            Permission::Mentor if user.role != Role::Mentor => {
                Err(denied("mentor access required".to_string()))
            }
            Permission::Mentee if user.role != Role::Mentee => {
                Err(denied("mentee access required".to_string()))
            }
            Permission::StaffOrAdmin if user.role == Role::Mentee => {
                Err(denied("staff access required".to_string()))
            }
            Permission::MentorOf(mentee_id) => match user.role {
                Role::Admin => Ok(()),
                Role::Mentor => {
                    let Some((mentee, _)) =
                        MenteeRepository::new(self.db).find_by_id(mentee_id).await?
                    else {
                        return Err(AppError::NotFound(format!(
                            "Mentee {} not found",
                            mentee_id
                        )));
                    };
                    let mentor = MentorRepository::new(self.db)
                        .find_by_user_id(user.id)
                        .await?;

                    match (mentor, mentee.mentor_id) {
                        (Some(mentor), Some(assigned)) if mentor.id == assigned => Ok(()),
                        _ => Err(denied(format!(
                            "mentee {} is not assigned to caller",
                            mentee_id
                        ))),
                    }
                }
                Role::Mentee => Err(denied(format!(
                    "mentor access to mentee {} required",
                    mentee_id
                ))),
            },
            _ => Ok(()),
        }
    }
}
