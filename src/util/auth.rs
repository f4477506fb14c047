//! Route-guard decisions shared by every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical gating: wait while the session is
//! still resolving, send signed-out visitors to the sign-in view, and
//! steer signed-in users who land on someone else's view to their own
//! landing page instead of a generic "forbidden" screen.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/auth";

/// Landing page for roles without a dashboard of their own.
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard/athlete";

/// The landing view for a role.
///
/// Roles absent from the mapping share [`DEFAULT_DASHBOARD_PATH`]; there is
/// deliberately no unhandled case.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Athlete | Role::StudentAthlete => "/dashboard/athlete",
        Role::Sponsor => "/dashboard/sponsor",
        Role::Fan => "/dashboard/fan",
        Role::Influencer => "/dashboard/influencer",
        Role::Admin | Role::SchoolAdmin | Role::Agency | Role::Unknown => DEFAULT_DASHBOARD_PATH,
    }
}

/// Whether `role` may enter a view declared for `required`.
///
/// A role always satisfies its own requirement, and additionally any
/// requirement whose landing view is also that role's own landing view.
/// The second rule is what lets a student athlete use the athlete
/// dashboard — and it makes redirect loops structurally impossible, since
/// a role is always admitted to the view it gets redirected to.
pub fn satisfies_requirement(role: Role, required: Role) -> bool {
    role == required || dashboard_path(role) == dashboard_path(required)
}

/// What a protected view should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; render a neutral indicator, decide nothing.
    Wait,
    /// Not signed in; go to [`LOGIN_PATH`].
    RedirectToLogin,
    /// Signed in and allowed; render the view.
    Render,
    /// Signed in but this view belongs to another role; go to the user's
    /// own landing view.
    RedirectTo(&'static str),
}

/// Gate a view with an optional role requirement.
pub fn decide_route(state: &SessionState, required_role: Option<Role>) -> RouteDecision {
    match state {
        SessionState::Loading => RouteDecision::Wait,
        SessionState::Unauthenticated => RouteDecision::RedirectToLogin,
        SessionState::Authenticated(account) => match required_role {
            Some(required) if !satisfies_requirement(account.role, required) => {
                RouteDecision::RedirectTo(dashboard_path(account.role))
            }
            _ => RouteDecision::Render,
        },
    }
}
