use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A user row carries a role string the application doesn't know.
    ///
    /// Roles are only ever written by the application itself, so this points at
    /// manual database edits. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Unknown role '{role}' stored for user {user_id}")]
    UnknownRole {
        /// The user whose role failed to parse
        user_id: i32,
        /// The stored role value
        role: String,
    },

    /// A notification's `target_roles` column is not a JSON array of strings.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse target roles for notification {notification_id}: {source}")]
    InvalidTargetRoles {
        /// The notification whose column failed to parse
        notification_id: i32,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A mentor or mentee row exists without its user row.
    #[error("Missing user row for {0}")]
    MissingUser(String),
}
