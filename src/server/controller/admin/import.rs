use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        import::{ImportResultDto, ImportUploadDto},
    },
    server::{
        controller::admin::ADMIN_TAG,
        error::{import::ImportError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::import::{sheet::Sheet, ImportService},
        state::AppState,
    },
};

/// Import mentees from an `.xlsx` or `.csv` file.
///
/// Required columns: `usn`, `name`, `semester`. Optional: `section`, `email`,
/// `mentor` (a mentor's username). Existing USNs are updated in place; new USNs get an
/// account whose username and initial password are the USN.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Per-row summary; failing rows do not stop the rest
/// - `400 Bad Request` - No file, unsupported type, or missing columns
#[utoipa::path(
    post,
    path = "/api/admin/import/mentees",
    tag = ADMIN_TAG,
    request_body(content = ImportUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Import summary", body = ImportResultDto),
        (status = 400, description = "File rejected", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_mentees(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let sheet = read_upload(multipart).await?;
    let summary = ImportService::new(&state.db, state.bcrypt_cost)
        .import_mentees(&sheet)
        .await?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Import mentors from an `.xlsx` or `.csv` file.
///
/// Required columns: `username`, `name`, `department`. Optional: `email`,
/// `specialization`. New mentors get the username as initial password.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/import/mentors",
    tag = ADMIN_TAG,
    request_body(content = ImportUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Import summary", body = ImportResultDto),
        (status = 400, description = "File rejected", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_mentors(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let sheet = read_upload(multipart).await?;
    let summary = ImportService::new(&state.db, state.bcrypt_cost)
        .import_mentors(&sheet)
        .await?;

    state.dashboard_cache.invalidate_all().await;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Reads the `file` field of the upload and parses it by its file name.
async fn read_upload(mut multipart: Multipart) -> Result<Sheet, ImportError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        return Sheet::parse(&filename, bytes.to_vec());
    }

    Err(ImportError::MissingFile)
}
