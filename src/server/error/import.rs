use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// File-level failures of a bulk import.
///
/// These abort the whole upload. Problems with individual rows are reported in the
/// import summary instead and never surface as an `ImportError`.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The multipart body had no `file` field.
    #[error("No file uploaded, expected multipart field 'file'")]
    MissingFile,

    /// The uploaded file's extension is neither `.xlsx` nor `.csv`.
    #[error("Unsupported file type '{0}', expected .xlsx or .csv")]
    UnsupportedFileType(String),

    /// The file has no header row or no worksheet.
    #[error("The uploaded file is empty")]
    EmptyFile,

    /// The header row lacks one or more required columns.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The CSV body is not valid UTF-8.
    #[error("CSV file is not valid UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// The CSV body could not be tokenized.
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook could not be opened or read.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// The multipart stream itself was malformed.
    #[error("Failed to read upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

/// All import errors are caused by the uploaded file, so they map to 400 Bad Request
/// with the error's own message.
impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
