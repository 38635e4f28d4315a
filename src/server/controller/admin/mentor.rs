use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        mentor::{
            CreateMentorDto, DeleteMentorDto, MentorDto, PaginatedMentorsDto, UpdateMentorDto,
        },
    },
    server::{
        controller::admin::ADMIN_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::mentor::{CreateMentorParams, UpdateMentorParams},
        service::mentor::MentorService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct MentorListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub department: Option<String>,
}

fn default_entries() -> u64 {
    10
}

/// Get a page of mentors with their current mentee counts.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/mentors",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("department" = Option<String>, Query, description = "Only mentors of this department")
    ),
    responses(
        (status = 200, description = "Page of mentors", body = PaginatedMentorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentors(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MentorListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let department = params
        .department
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let mentors = MentorService::new(&state.db)
        .get_paginated(department, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(mentors.into_dto())))
}

/// Create a mentor account.
///
/// The initial password defaults to the username.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/mentors",
    tag = ADMIN_TAG,
    request_body = CreateMentorDto,
    responses(
        (status = 201, description = "Mentor created", body = MentorDto),
        (status = 400, description = "Invalid mentor data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mentor(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMentorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateMentorParams::from_dto(payload)?;
    let mentor = MentorService::new(&state.db)
        .create(params, state.bcrypt_cost)
        .await?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::CREATED, Json(mentor.into_dto())))
}

/// Get a mentor by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/mentors/{mentor_id}",
    tag = ADMIN_TAG,
    params(("mentor_id" = i32, Path, description = "Mentor ID")),
    responses(
        (status = 200, description = "Mentor", body = MentorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Mentor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentor(
    State(state): State<AppState>,
    session: Session,
    Path(mentor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mentor = MentorService::new(&state.db)
        .get_by_id(mentor_id)
        .await?
        .ok_or_else(|| mentor_not_found(mentor_id))?;

    Ok((StatusCode::OK, Json(mentor.into_dto())))
}

/// Update a mentor's profile and active flag.
///
/// Deactivating a mentor keeps their mentees but excludes the mentor from
/// automatic assignment.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/mentors/{mentor_id}",
    tag = ADMIN_TAG,
    params(("mentor_id" = i32, Path, description = "Mentor ID")),
    request_body = UpdateMentorDto,
    responses(
        (status = 200, description = "Mentor updated", body = MentorDto),
        (status = 400, description = "Invalid mentor data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Mentor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mentor(
    State(state): State<AppState>,
    session: Session,
    Path(mentor_id): Path<i32>,
    Json(payload): Json<UpdateMentorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateMentorParams::from_dto(mentor_id, payload)?;
    let mentor = MentorService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| mentor_not_found(mentor_id))?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::OK, Json(mentor.into_dto())))
}

/// Delete a mentor.
///
/// Every mentee of the mentor moves to the least-loaded remaining active mentor,
/// or becomes unassigned when there is none.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/mentors/{mentor_id}",
    tag = ADMIN_TAG,
    params(("mentor_id" = i32, Path, description = "Mentor ID")),
    responses(
        (status = 200, description = "Mentor deleted", body = DeleteMentorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Mentor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mentor(
    State(state): State<AppState>,
    session: Session,
    Path(mentor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let removal = MentorService::new(&state.db)
        .delete(mentor_id)
        .await?
        .ok_or_else(|| mentor_not_found(mentor_id))?;

    state.dashboard_cache.invalidate_all().await;

    Ok((
        StatusCode::OK,
        Json(DeleteMentorDto {
            reassigned: removal.reassigned,
            unassigned: removal.unassigned,
        }),
    ))
}

fn mentor_not_found(mentor_id: i32) -> AppError {
    AppError::NotFound(format!("Mentor {} not found", mentor_id))
}
