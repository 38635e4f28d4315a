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
        subject::{SaveSubjectDto, SubjectDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, subject::SubjectListParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::subject::{SaveSubjectParams, Subject},
        service::subject::SubjectService,
        state::AppState,
    },
};

/// List subjects for management.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/subjects",
    tag = ADMIN_TAG,
    params(("semester" = Option<i32>, Query, description = "Only subjects of this semester")),
    responses(
        (status = 200, description = "Subjects", body = Vec<SubjectDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SubjectListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let subjects = SubjectService::new(&state.db)
        .get_all(params.semester)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            subjects
                .into_iter()
                .map(Subject::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a subject. Codes are unique and stored upper-cased.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/subjects",
    tag = ADMIN_TAG,
    request_body = SaveSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Subject code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = SaveSubjectParams::from_dto(payload)?;
    let subject = SubjectService::new(&state.db).create(params).await?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::CREATED, Json(subject.into_dto())))
}

/// Update a subject.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/subjects/{subject_id}",
    tag = ADMIN_TAG,
    params(("subject_id" = i32, Path, description = "Subject ID")),
    request_body = SaveSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 409, description = "Subject code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subject(
    State(state): State<AppState>,
    session: Session,
    Path(subject_id): Path<i32>,
    Json(payload): Json<SaveSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = SaveSubjectParams::from_dto(payload)?;
    let subject = SubjectService::new(&state.db)
        .update(subject_id, params)
        .await?
        .ok_or_else(|| subject_not_found(subject_id))?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::OK, Json(subject.into_dto())))
}

/// Delete a subject together with its academic records.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/subjects/{subject_id}",
    tag = ADMIN_TAG,
    params(("subject_id" = i32, Path, description = "Subject ID")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    session: Session,
    Path(subject_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if !SubjectService::new(&state.db).delete(subject_id).await? {
        return Err(subject_not_found(subject_id));
    }

    state.dashboard_cache.invalidate_all().await;

    Ok(StatusCode::NO_CONTENT)
}

fn subject_not_found(subject_id: i32) -> AppError {
    AppError::NotFound(format!("Subject {} not found", subject_id))
}
