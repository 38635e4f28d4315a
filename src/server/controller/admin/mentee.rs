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
        mentee::{
            AssignMentorDto, AutoAssignResultDto, CreateMenteeDto, MenteeDto, PaginatedMenteesDto,
            UpdateMenteeDto,
        },
    },
    server::{
        controller::admin::ADMIN_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::mentee::{CreateMenteeParams, MenteeFilter, UpdateMenteeParams},
        service::mentee::MenteeService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct MenteeListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub mentor_id: Option<i32>,
    #[serde(default)]
    pub unassigned: bool,
    pub search: Option<String>,
}

fn default_entries() -> u64 {
    10
}

impl MenteeListParams {
    fn filter(&self) -> MenteeFilter {
        MenteeFilter {
            semester: self.semester,
            section: self
                .section
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            mentor_id: self.mentor_id,
            unassigned: self.unassigned,
            search: self.search.clone(),
        }
    }
}

/// Get a filtered page of mentees ordered by USN.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/mentees",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("semester" = Option<i32>, Query, description = "Only this semester"),
        ("section" = Option<String>, Query, description = "Only this section"),
        ("mentor_id" = Option<i32>, Query, description = "Only mentees of this mentor"),
        ("unassigned" = Option<bool>, Query, description = "Only mentees without a mentor"),
        ("search" = Option<String>, Query, description = "Substring of name or USN")
    ),
    responses(
        (status = 200, description = "Page of mentees", body = PaginatedMenteesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentees(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MenteeListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mentees = MenteeService::new(&state.db)
        .get_paginated(params.filter(), params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(mentees.into_dto())))
}

/// Create a mentee account.
///
/// Without a `mentor_id` the mentee goes to the least-loaded active mentor.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/mentees",
    tag = ADMIN_TAG,
    request_body = CreateMenteeDto,
    responses(
        (status = 201, description = "Mentee created", body = MenteeDto),
        (status = 400, description = "Invalid mentee data or inactive mentor", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "USN already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mentee(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenteeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateMenteeParams::from_dto(payload)?;
    let mentee = MenteeService::new(&state.db)
        .create(params, state.bcrypt_cost)
        .await?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::CREATED, Json(mentee.into_dto())))
}

/// Get a mentee by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/mentees/{mentee_id}",
    tag = ADMIN_TAG,
    params(("mentee_id" = i32, Path, description = "Mentee ID")),
    responses(
        (status = 200, description = "Mentee", body = MenteeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Mentee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentee(
    State(state): State<AppState>,
    session: Session,
    Path(mentee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mentee = MenteeService::new(&state.db)
        .get_by_id(mentee_id)
        .await?
        .ok_or_else(|| mentee_not_found(mentee_id))?;

    Ok((StatusCode::OK, Json(mentee.into_dto())))
}

/// Update a mentee's profile and active flag.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/mentees/{mentee_id}",
    tag = ADMIN_TAG,
    params(("mentee_id" = i32, Path, description = "Mentee ID")),
    request_body = UpdateMenteeDto,
    responses(
        (status = 200, description = "Mentee updated", body = MenteeDto),
        (status = 400, description = "Invalid mentee data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Mentee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mentee(
    State(state): State<AppState>,
    session: Session,
    Path(mentee_id): Path<i32>,
    Json(payload): Json<UpdateMenteeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateMenteeParams::from_dto(mentee_id, payload)?;
    let mentee = MenteeService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| mentee_not_found(mentee_id))?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::OK, Json(mentee.into_dto())))
}

/// Delete a mentee and their account.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/mentees/{mentee_id}",
    tag = ADMIN_TAG,
    params(("mentee_id" = i32, Path, description = "Mentee ID")),
    responses(
        (status = 204, description = "Mentee deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Mentee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mentee(
    State(state): State<AppState>,
    session: Session,
    Path(mentee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if !MenteeService::new(&state.db).delete(mentee_id).await? {
        return Err(mentee_not_found(mentee_id));
    }

    state.dashboard_cache.invalidate_all().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a mentee to a mentor, or unassign with `mentor_id: null`.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/mentees/{mentee_id}/mentor",
    tag = ADMIN_TAG,
    params(("mentee_id" = i32, Path, description = "Mentee ID")),
    request_body = AssignMentorDto,
    responses(
        (status = 200, description = "Assignment updated", body = MenteeDto),
        (status = 400, description = "Mentor missing or inactive", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Mentee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_mentor(
    State(state): State<AppState>,
    session: Session,
    Path(mentee_id): Path<i32>,
    Json(payload): Json<AssignMentorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let mentee = MenteeService::new(&state.db)
        .assign_mentor(mentee_id, payload.mentor_id)
        .await?
        .ok_or_else(|| mentee_not_found(mentee_id))?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::OK, Json(mentee.into_dto())))
}

/// Assign every active unassigned mentee to the least-loaded active mentors.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/mentees/auto-assign",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Number of mentees assigned", body = AutoAssignResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn auto_assign(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let assigned = MenteeService::new(&state.db)
        .auto_assign_unassigned()
        .await?;

    state.dashboard_cache.invalidate_all().await;

    Ok((
        StatusCode::OK,
        Json(AutoAssignResultDto {
            assigned: assigned as u64,
        }),
    ))
}

fn mentee_not_found(mentee_id: i32) -> AppError {
    AppError::NotFound(format!("Mentee {} not found", mentee_id))
}
