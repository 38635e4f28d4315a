//! User roles and their landing pages.

use std::fmt;

/// Role stored on every user row.
///
/// Each role owns one top-level client path prefix (`/admin`, `/mentor`, `/mentee`)
/// and is sent to that prefix's dashboard after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Mentor,
    Mentee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Mentor, Role::Mentee];

    /// Lower-case name as stored in the database and sent over the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mentor => "mentor",
            Role::Mentee => "mentee",
        }
    }

    /// Parses a stored role name; matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Client path prefix reserved for this role.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Mentor => "/mentor",
            Role::Mentee => "/mentee",
        }
    }

    /// Dashboard the role lands on after login or when redirected.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Mentor => "/mentor/dashboard",
            Role::Mentee => "/mentee/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
