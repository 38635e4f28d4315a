//! Mentor endpoints under `/api/mentor`, scoped to the caller's own mentees.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::MentorDashboardDto,
        mentee::MenteeDto,
        message::{GroupMessageDto, PostGroupMessageDto},
        record::{AcademicRecordDto, AtRiskMenteeDto, ProgressDto, UpsertRecordDto},
    },
    server::{
        controller::AfterParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{mentor::Mentor, record::UpsertRecordParams, user::User},
        service::{
            dashboard::DashboardService, mentee::MenteeService, mentor::MentorService,
            message::MessageService, record::AcademicRecordService,
        },
        state::AppState,
    },
};

pub static MENTOR_TAG: &str = "mentor";

/// Get the mentor dashboard.
///
/// # Access Control
/// - `Mentor`
#[utoipa::path(
    get,
    path = "/api/mentor/dashboard",
    tag = MENTOR_TAG,
    responses(
        (status = 200, description = "Dashboard figures", body = MentorDashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentor", body = ErrorDto),
        (status = 404, description = "No mentor profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentor])
        .await?;
    let mentor = current_mentor(&state, &user).await?;

    let dashboard = DashboardService::new(&state.db)
        .mentor(mentor.id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Get the caller's mentees ordered by USN.
///
/// # Access Control
/// - `Mentor`
#[utoipa::path(
    get,
    path = "/api/mentor/mentees",
    tag = MENTOR_TAG,
    responses(
        (status = 200, description = "Assigned mentees", body = Vec<MenteeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentor", body = ErrorDto),
        (status = 404, description = "No mentor profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentees(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentor])
        .await?;
    let mentor = current_mentor(&state, &user).await?;

    let mentees: Vec<MenteeDto> = MenteeService::new(&state.db)
        .get_by_mentor(mentor.id)
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(mentees)))
}

/// Get the academic progress of one of the caller's mentees.
///
/// # Access Control
/// - `Mentor` assigned to the mentee
#[utoipa::path(
    get,
    path = "/api/mentor/mentees/{mentee_id}",
    tag = MENTOR_TAG,
    params(("mentee_id" = i32, Path, description = "Mentee ID")),
    responses(
        (status = 200, description = "Mentee progress", body = ProgressDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this mentee's mentor", body = ErrorDto),
        (status = 404, description = "Mentee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentee_progress(
    State(state): State<AppState>,
    session: Session,
    Path(mentee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentor, Permission::MentorOf(mentee_id)])
        .await?;

    let progress = AcademicRecordService::new(&state.db)
        .progress(mentee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Mentee {} not found", mentee_id)))?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}

/// Create or replace a mentee's record for one subject.
///
/// # Access Control
/// - `Mentor` assigned to the mentee
///
/// # Returns
/// - `200 OK` - Stored record
/// - `400 Bad Request` - Marks or attendance out of range, or unknown subject
#[utoipa::path(
    put,
    path = "/api/mentor/mentees/{mentee_id}/records",
    tag = MENTOR_TAG,
    params(("mentee_id" = i32, Path, description = "Mentee ID")),
    request_body = UpsertRecordDto,
    responses(
        (status = 200, description = "Record stored", body = AcademicRecordDto),
        (status = 400, description = "Invalid record", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this mentee's mentor", body = ErrorDto),
        (status = 404, description = "Mentee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_record(
    State(state): State<AppState>,
    session: Session,
    Path(mentee_id): Path<i32>,
    Json(payload): Json<UpsertRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentor, Permission::MentorOf(mentee_id)])
        .await?;

    let params = UpsertRecordParams::from_dto(mentee_id, payload)?;
    let record = AcademicRecordService::new(&state.db).upsert(params).await?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Get the caller's at-risk mentees, lowest attendance first.
///
/// # Access Control
/// - `Mentor`
#[utoipa::path(
    get,
    path = "/api/mentor/at-risk",
    tag = MENTOR_TAG,
    responses(
        (status = 200, description = "At-risk mentees", body = Vec<AtRiskMenteeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentor", body = ErrorDto),
        (status = 404, description = "No mentor profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_at_risk(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentor])
        .await?;
    let mentor = current_mentor(&state, &user).await?;

    let at_risk: Vec<AtRiskMenteeDto> = AcademicRecordService::new(&state.db)
        .at_risk(Some(mentor.id))
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(at_risk)))
}

/// Get the caller's group messages in posting order.
///
/// # Access Control
/// - `Mentor`
#[utoipa::path(
    get,
    path = "/api/mentor/group-messages",
    tag = MENTOR_TAG,
    params(("after" = Option<i32>, Query, description = "Only messages with a greater ID")),
    responses(
        (status = 200, description = "Group messages", body = Vec<GroupMessageDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentor", body = ErrorDto),
        (status = 404, description = "No mentor profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_messages(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AfterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentor])
        .await?;
    let mentor = current_mentor(&state, &user).await?;

    let messages: Vec<GroupMessageDto> = MessageService::new(&state.db)
        .group_messages(mentor.id, params.after)
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(messages)))
}

/// Post a group message to all of the caller's mentees.
///
/// # Access Control
/// - `Mentor`
#[utoipa::path(
    post,
    path = "/api/mentor/group-messages",
    tag = MENTOR_TAG,
    request_body = PostGroupMessageDto,
    responses(
        (status = 201, description = "Message posted", body = GroupMessageDto),
        (status = 400, description = "Content blank or too long", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a mentor", body = ErrorDto),
        (status = 404, description = "No mentor profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_group_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PostGroupMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Mentor])
        .await?;
    let mentor = current_mentor(&state, &user).await?;

    let message = MessageService::new(&state.db)
        .post_group(mentor.id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Resolves the mentor profile behind a mentor account.
async fn current_mentor(state: &AppState, user: &User) -> Result<Mentor, AppError> {
    MentorService::new(&state.db)
        .get_by_user_id(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("No mentor profile for this account".to_string()))
}
