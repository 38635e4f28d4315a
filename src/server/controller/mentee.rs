use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto, dashboard::MenteeDashboardDto, message::GroupMessageDto,
        record::ProgressDto,
    },
    server::{
        controller::AfterParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{mentee::Mentee, user::User},
        service::{
            dashboard::DashboardService, mentee::MenteeService, message::MessageService,
            record::AcademicRecordService,
        },
        state::AppState,
    },
};

pub static MENTEE_TAG: &str = "mentee";

/// Get the mentee dashboard: profile, mentor contact, attendance and unread counts.
///
/// # Access Control
/// - `Mentee`
#[utoipa::path(
    get,
    path = "/api/mentee/dashboard",
    tag = MENTEE_TAG,
    responses(
        (status = 200, description = "Dashboard", body = MenteeDashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentee", body = ErrorDto),
        (status = 404, description = "No mentee profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentee])
        .await?;
    let mentee = current_mentee(&state, &user).await?;

    let dashboard = DashboardService::new(&state.db).mentee(mentee).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Get the caller's own academic records and summary.
///
/// # Access Control
/// - `Mentee`
#[utoipa::path(
    get,
    path = "/api/mentee/progress",
    tag = MENTEE_TAG,
    responses(
        (status = 200, description = "Progress", body = ProgressDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentee", body = ErrorDto),
        (status = 404, description = "No mentee profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_progress(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentee])
        .await?;
    let mentee = current_mentee(&state, &user).await?;

    let progress = AcademicRecordService::new(&state.db)
        .progress(mentee.id)
        .await?
        .ok_or_else(no_profile)?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}

/// Get the group messages of the caller's mentor.
///
/// An unassigned mentee gets an empty list.
///
/// # Access Control
/// - `Mentee`
#[utoipa::path(
    get,
    path = "/api/mentee/group-messages",
    tag = MENTEE_TAG,
    params(("after" = Option<i32>, Query, description = "Only messages with a greater ID")),
    responses(
        (status = 200, description = "Group messages", body = Vec<GroupMessageDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentee", body = ErrorDto),
        (status = 404, description = "No mentee profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_messages(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AfterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentee])
        .await?;
    let mentee = current_mentee(&state, &user).await?;

    let messages: Vec<GroupMessageDto> = match mentee.mentor_id {
        Some(mentor_id) => MessageService::new(&state.db)
            .group_messages(mentor_id, params.after)
            .await?
            .into_iter()
            .map(|m| m.into_dto())
            .collect(),
        None => Vec::new(),
    };

    Ok((StatusCode::OK, Json(messages)))
}

async fn current_mentee(state: &AppState, user: &User) -> Result<Mentee, AppError> {
    MenteeService::new(&state.db)
        .get_by_user_id(user.id)
        .await?
        .ok_or_else(no_profile)
}

fn no_profile() -> AppError {
    AppError::NotFound("No mentee profile for this account".to_string())
}
