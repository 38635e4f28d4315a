//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::dashboard::DashboardCache;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `DashboardCache` wraps its map in an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// bcrypt work factor used for every new password hash.
    pub bcrypt_cost: u32,

    /// Short-lived cache of the admin dashboard aggregates.
    ///
    /// Handlers that change mentors, mentees or subjects must call
    /// `invalidate_all` so the next dashboard read recomputes.
    pub dashboard_cache: DashboardCache,
}

impl AppState {
    pub fn new(db: DatabaseConnection, bcrypt_cost: u32, dashboard_cache: DashboardCache) -> Self {
        Self {
            db,
            bcrypt_cost,
            dashboard_cache,
        }
    }
}
