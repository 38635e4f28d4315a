use crate::server::error::AppError;

/// Shortest password accepted on change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password with bcrypt at the given cost.
///
/// # Arguments
/// - `password` - Plaintext password
/// - `cost` - bcrypt cost factor from configuration
///
/// # Returns
/// - `Ok(String)` - The bcrypt hash
/// - `Err(AppError::BcryptErr)` - Hashing failed, e.g. the cost is out of range
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash is treated as a mismatch rather than an error so that
/// corrupt rows cannot be logged into.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
