//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Password every factory-created user can log in with.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Cheapest cost bcrypt accepts, for hashing in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique usernames,
/// USNs and subject codes across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a password with the cheapest bcrypt cost so tests stay fast.
pub fn hash_password(password: &str) -> Result<String, DbErr> {
    bcrypt::hash(password, TEST_BCRYPT_COST).map_err(|e| DbErr::Custom(e.to_string()))
}

/// Creates a mentor with `count` mentees assigned to them.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of mentees to create and assign
///
/// # Returns
/// - `Ok((mentor, mentees))` - The created mentor row and the created mentee rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mentor_with_mentees(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::mentor::Model, Vec<entity::mentee::Model>), DbErr> {
    let (_, mentor) = crate::factory::mentor::create_mentor(db).await?;

    let mut mentees = Vec::with_capacity(count);
    for _ in 0..count {
        let (_, mentee) = crate::factory::mentee::create_mentee_for(db, mentor.id).await?;
        mentees.push(mentee);
    }

    Ok((mentor, mentees))
}
