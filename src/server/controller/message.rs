use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        message::{MessageDto, SendMessageDto},
    },
    server::{
        controller::AfterParams, error::AppError, middleware::auth::AuthGuard,
        service::message::MessageService, state::AppState,
    },
};

pub static MESSAGE_TAG: &str = "message";

/// Send a direct message.
///
/// Admins may message anyone; mentors and mentees only each other within an
/// assignment.
///
/// # Access Control
/// - Any logged in user, subject to the pairing rule above
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Content blank or too long, or messaging yourself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to message this user", body = ErrorDto),
        (status = 404, description = "Receiver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .send(&user, payload.receiver_id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Count direct messages to the caller that are still unread.
#[utoipa::path(
    get,
    path = "/api/messages/unread-count",
    tag = MESSAGE_TAG,
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

    let count = MessageService::new(&state.db).unread_count(user.id).await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Get the conversation with another user, oldest first.
///
/// Messages from the other user are marked read. Clients poll with `after` set to the
/// last ID they have seen.
#[utoipa::path(
    get,
    path = "/api/messages/{user_id}",
    tag = MESSAGE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID of the other participant"),
        ("after" = Option<i32>, Query, description = "Only messages with a greater ID")
    ),
    responses(
        (status = 200, description = "Conversation", body = Vec<MessageDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to message this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Query(params): Query<AfterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages: Vec<MessageDto> = MessageService::new(&state.db)
        .conversation(&user, user_id, params.after)
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(messages)))
}
