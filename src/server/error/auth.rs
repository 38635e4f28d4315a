use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request was made without logging in or after the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No user found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an admin deletes an account while its session is still alive.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username is unknown or the password does not match.
    ///
    /// Both cases share one message so usernames cannot be enumerated.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The mentor or mentee account behind this login has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account for user {0} is inactive")]
    AccountInactive(i32),

    /// The authenticated user lacks the permission required for the operation.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Description of the attempted action, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The current password supplied to a password change is wrong.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Current password is incorrect for user {0}")]
    IncorrectPassword(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not authenticated"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `AccountInactive` → 403 Forbidden with "Account is inactive"
/// - `AccessDenied` → 403 Forbidden with "Access denied"
/// - `IncorrectPassword` → 400 Bad Request with "Current password is incorrect"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::AccountInactive(_) => (StatusCode::FORBIDDEN, "Account is inactive"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::IncorrectPassword(_) => {
                (StatusCode::BAD_REQUEST, "Current password is incorrect")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
