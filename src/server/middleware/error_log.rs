//! Persists server errors to the `error_logs` table.
//!
//! `InternalServerError` attaches a [`ServerErrorDetail`] to every 5xx response it
//! builds. This middleware picks that detail up after the handler ran and stores it
//! with the request line and the session user.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::server::{
    error::ServerErrorDetail, middleware::session::AuthSession,
    service::error_log::ErrorLogService, state::AppState,
};

pub async fn log_server_errors(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let action = format!("{} {}", request.method(), request.uri().path());

    let response = next.run(request).await;

    if !response.status().is_server_error() {
        return response;
    }

    let error = response
        .extensions()
        .get::<ServerErrorDetail>()
        .map(|detail| detail.0.clone())
        .unwrap_or_else(|| response.status().to_string());

    // A broken session must not prevent the log entry.
    let user_id = AuthSession::new(&session)
        .get_user_id()
        .await
        .unwrap_or_default();

    if let Err(err) = ErrorLogService::new(&state.db)
        .record(user_id, action, error)
        .await
    {
        tracing::error!("Failed to persist error log: {}", err);
    }

    response
}
