//! Client route resolution.
//!
//! The browser app asks where a user may go before rendering a page. Each role owns
//! one path prefix; public pages are for anonymous visitors only.

use crate::server::model::role::Role;

pub const LOGIN_PATH: &str = "/login";

const PUBLIC_PATHS: [&str; 2] = ["/", LOGIN_PATH];

/// Outcome of resolving a client path for a visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision {
    pub allowed: bool,
    pub redirect: Option<String>,
}

impl RouteDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            redirect: None,
        }
    }

    fn redirect(path: &str) -> Self {
        Self {
            allowed: false,
            redirect: Some(path.to_string()),
        }
    }
}

/// Decides whether a visitor with `role` (or anonymous) may open `path`.
pub fn resolve(role: Option<Role>, path: &str) -> RouteDecision {
    let path = normalize(path);

    if PUBLIC_PATHS.contains(&path) {
        return match role {
            Some(role) => RouteDecision::redirect(role.home_path()),
            None => RouteDecision::allow(),
        };
    }

    let owner = Role::ALL
        .into_iter()
        .find(|candidate| under_prefix(path, candidate.path_prefix()));

    match (role, owner) {
        (None, _) => RouteDecision::redirect(LOGIN_PATH),
        (Some(role), Some(owner)) if role != owner => RouteDecision::redirect(role.home_path()),
        (Some(_), _) => RouteDecision::allow(),
    }
}

/// Drops the query string, fragment and any trailing slash.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// `/admin` and `/admin/x` are under `/admin`; `/administrator` is not.
fn under_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
