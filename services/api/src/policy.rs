//! Route authorization policy
//!
//! Every reminder route is listed once with the roles allowed to call it.
//! The authorization middleware consults this table before the handler runs;
//! a route that is not listed is denied. A listed route template called with a
//! method it does not serve is left to the router, which answers 405.

use axum::http::Method;

use crate::identity::{Identity, Role};

const ANY_ROLE: &[Role] = &[Role::Admin, Role::User];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Roles accepted on one `(method, route template)` pair
#[derive(Debug)]
pub struct RoutePolicy {
    pub method: Method,
    pub path: &'static str,
    pub roles: &'static [Role],
}

/// Policy table for the reminder routes, keyed by axum route template
pub static REMINDER_POLICIES: [RoutePolicy; 7] = [
    RoutePolicy {
        method: Method::POST,
        path: "/api/reminders",
        roles: ANY_ROLE,
    },
    RoutePolicy {
        method: Method::GET,
        path: "/api/reminders/all",
        roles: ADMIN_ONLY,
    },
    RoutePolicy {
        method: Method::GET,
        path: "/api/reminders",
        roles: ANY_ROLE,
    },
    RoutePolicy {
        method: Method::GET,
        path: "/api/reminders/:id",
        roles: ANY_ROLE,
    },
    RoutePolicy {
        method: Method::GET,
        path: "/api/reminders/search",
        roles: ANY_ROLE,
    },
    RoutePolicy {
        method: Method::PUT,
        path: "/api/reminders/:id",
        roles: ANY_ROLE,
    },
    RoutePolicy {
        method: Method::DELETE,
        path: "/api/reminders/:id",
        roles: ANY_ROLE,
    },
];

/// Roles required for `method` on the route template `path`
///
/// `HEAD` shares the `GET` entry since the router answers it with the `GET`
/// handler.
pub fn required_roles(method: &Method, path: &str) -> Option<&'static [Role]> {
    let method = if *method == Method::HEAD {
        &Method::GET
    } else {
        method
    };

    REMINDER_POLICIES
        .iter()
        .find(|policy| policy.method == *method && policy.path == path)
        .map(|policy| policy.roles)
}

/// True when some method on the route template `path` has a policy entry
pub fn is_listed_path(path: &str) -> bool {
    REMINDER_POLICIES.iter().any(|policy| policy.path == path)
}

pub fn is_authorized(identity: &Identity, method: &Method, path: &str) -> bool {
    required_roles(method, path).is_some_and(|roles| identity.has_any_role(roles))
}
