//! Admin-only endpoints under `/api/admin`.

pub mod import;
pub mod mentee;
pub mod mentor;
pub mod subject;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::AdminDashboardDto, error_log::PaginatedErrorLogsDto},
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{dashboard::DashboardService, error_log::ErrorLogService},
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Get the admin dashboard.
///
/// Aggregates are cached briefly and recomputed after any admin change.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard aggregates", body = AdminDashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let dashboard = DashboardService::new(&state.db)
        .admin(&state.dashboard_cache)
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Get logged server errors, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/error-logs",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of error logs", body = PaginatedErrorLogsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_error_logs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let logs = ErrorLogService::new(&state.db)
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(logs.into_dto())))
}
