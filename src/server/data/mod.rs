//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed connection and is generic over `ConnectionTrait`,
//! so the same queries run against the pool or inside a transaction. Repositories
//! return domain models where no extra context is needed and raw entity rows where
//! the caller still has to join or inspect stored fields such as password hashes.

pub mod error_log;
pub mod mentee;
pub mod mentor;
pub mod message;
pub mod notification;
pub mod record;
pub mod subject;
pub mod user;

#[cfg(test)]
mod test;
