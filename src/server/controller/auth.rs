use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{ChangePasswordDto, LoginDto, LoginResponseDto, RouteAccessDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, route, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct RouteParams {
    pub path: String,
}

/// Log in with username and password.
///
/// Starts a fresh session for the user and tells the client where to go next.
///
/// # Returns
/// - `200 OK` - Logged in; body carries the user and their home path
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `403 Forbidden` - Account is inactive
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 403, description = "Account is inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, state.bcrypt_cost)
        .login(payload.username.trim(), &payload.password)
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    let redirect = user.role.home_path().to_string();

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            user: user.into_dto(),
            redirect,
        }),
    ))
}

/// Log out and destroy the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the current user's password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Current password wrong or new password too short
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Current password incorrect or new password too short", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthService::new(&state.db, state.bcrypt_cost)
        .change_password(user.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Check whether the caller may open a client path.
///
/// Anonymous callers are resolved as logged out rather than rejected.
#[utoipa::path(
    get,
    path = "/api/auth/route",
    tag = AUTH_TAG,
    params(
        ("path" = String, Query, description = "Client path to check, e.g. /admin/dashboard")
    ),
    responses(
        (status = 200, description = "Route decision", body = RouteAccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_route(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RouteParams>,
) -> Result<impl IntoResponse, AppError> {
    let role = match AuthGuard::new(&state.db, &session).require(&[]).await {
        Ok(user) => Some(user.role),
        Err(AppError::AuthErr(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {
            None
        }
        Err(e) => return Err(e),
    };

    let decision = route::resolve(role, &params.path);

    Ok((
        StatusCode::OK,
        Json(RouteAccessDto {
            allowed: decision.allowed,
            redirect: decision.redirect,
        }),
    ))
}
