use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        notification::{CreateNotificationDto, NotificationDto, NotificationsCreatedDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::CreateNotificationParams,
        service::notification::NotificationService,
        state::AppState,
    },
};

pub static NOTIFICATION_TAG: &str = "notification";

/// Get notifications visible to the caller, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications: Vec<NotificationDto> = NotificationService::new(&state.db)
        .list_for(&user)
        .await?
        .into_iter()
        .map(|n| n.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(notifications)))
}

/// Create a notification.
///
/// Admins address roles or a single user. Mentors address one of their mentees or,
/// with `all_mentees`, every one of them.
///
/// # Access Control
/// - `Admin` or `Mentor`
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Notifications created", body = NotificationsCreatedDto),
        (status = 400, description = "Invalid message or targets", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to address these recipients", body = ErrorDto),
        (status = 404, description = "Target user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::StaffOrAdmin])
        .await?;

    let params = CreateNotificationParams::from_dto(payload)?;
    let created = NotificationService::new(&state.db)
        .create(&user, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationsCreatedDto {
            created: created as u64,
        }),
    ))
}

/// Count notifications visible to the caller that they have not read.
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread count", body = CountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let count = NotificationService::new(&state.db)
        .unread_count(user.id, user.role)
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Mark a notification read for the caller.
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(("notification_id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 204, description = "Marked read"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .mark_read(&user, notification_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
