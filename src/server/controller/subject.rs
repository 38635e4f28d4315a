use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, subject::SubjectDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::subject::Subject,
        service::subject::SubjectService, state::AppState,
    },
};

pub static SUBJECT_TAG: &str = "subject";

#[derive(Deserialize)]
pub struct SubjectListParams {
    pub semester: Option<i32>,
}

/// List subjects, ordered by semester and code.
///
/// # Access Control
/// - Any logged in user
#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = SUBJECT_TAG,
    params(("semester" = Option<i32>, Query, description = "Only subjects of this semester")),
    responses(
        (status = 200, description = "Subjects", body = Vec<SubjectDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SubjectListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

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
