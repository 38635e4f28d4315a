use crate::server::error::AppError;

/// Trims a required text field
///
/// # Arguments
/// - `value` - Raw input
/// - `field` - Human readable field name used in the error message
///
/// # Returns
/// - `Ok(String)` - The trimmed value
/// - `Err(AppError::BadRequest)` - The value is empty after trimming
pub fn required(value: String, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

/// Trims an optional text field, treating blank input as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
