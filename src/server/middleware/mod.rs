//! Request guards, session access and response middleware.
//!
//! - `auth` - `AuthGuard` permission checks used at the top of every handler
//! - `session` - Typed access to the authenticated user ID in the session
//! - `route` - Client path resolution for role-scoped pages
//! - `error_log` - Persists 5xx responses to the error log

pub mod auth;
pub mod error_log;
pub mod route;
pub mod session;

#[cfg(test)]
mod test;
