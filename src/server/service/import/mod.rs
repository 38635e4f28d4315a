//! Bulk import of mentees and mentors from spreadsheets.
//!
//! A file-level problem (wrong type, no header, missing columns) rejects the upload.
//! After that every row is handled on its own: a failing row is reported with its row
//! number and the remaining rows still go through.

pub mod mentee;
pub mod mentor;
pub mod sheet;

use sea_orm::DatabaseConnection;

use crate::server::{error::AppError, model::import::RowOutcome};

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }
}

/// Turns the result of one row into the message stored in the summary.
///
/// Client-caused errors keep their message; anything else is logged and reported
/// generically so database details do not leak into the response.
fn row_result(row: usize, result: Result<RowOutcome, AppError>) -> Result<RowOutcome, String> {
    result.map_err(|err| match err {
        AppError::BadRequest(message)
        | AppError::Conflict(message)
        | AppError::NotFound(message) => message,
        other => {
            tracing::error!("Import row {} failed: {}", row, other);
            "Internal error while importing row".to_string()
        }
    })
}
