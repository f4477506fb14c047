use super::*;

use crate::net::types::User;
use crate::state::session::Account;

const ALL_ROLES: [Role; 9] = [
    Role::Athlete,
    Role::StudentAthlete,
    Role::Sponsor,
    Role::Fan,
    Role::Influencer,
    Role::Admin,
    Role::SchoolAdmin,
    Role::Agency,
    Role::Unknown,
];

fn authenticated(role: Role) -> SessionState {
    SessionState::Authenticated(Account {
        user: User {
            id: "u1".to_owned(),
            email: "a@x.com".to_owned(),
            name: None,
            role,
        },
        role,
        token: "h.p.s".to_owned(),
    })
}

/// The role each dashboard route declares.
fn declared_requirement(path: &str) -> Role {
    match path {
        "/dashboard/athlete" => Role::Athlete,
        "/dashboard/sponsor" => Role::Sponsor,
        "/dashboard/fan" => Role::Fan,
        "/dashboard/influencer" => Role::Influencer,
        other => panic!("unmapped dashboard path {other}"),
    }
}

// =============================================================
// dashboard_path
// =============================================================

#[test]
fn each_primary_role_has_its_own_dashboard() {
    assert_eq!(dashboard_path(Role::Athlete), "/dashboard/athlete");
    assert_eq!(dashboard_path(Role::Sponsor), "/dashboard/sponsor");
    assert_eq!(dashboard_path(Role::Fan), "/dashboard/fan");
    assert_eq!(dashboard_path(Role::Influencer), "/dashboard/influencer");
}

#[test]
fn student_athletes_share_the_athlete_dashboard() {
    assert_eq!(dashboard_path(Role::StudentAthlete), "/dashboard/athlete");
}

#[test]
fn unmapped_roles_land_on_the_default_dashboard() {
    for role in [Role::Admin, Role::SchoolAdmin, Role::Agency, Role::Unknown] {
        assert_eq!(dashboard_path(role), DEFAULT_DASHBOARD_PATH);
    }
}

// =============================================================
// decide_route
// =============================================================

#[test]
fn loading_session_waits() {
    assert_eq!(decide_route(&SessionState::Loading, None), RouteDecision::Wait);
    assert_eq!(
        decide_route(&SessionState::Loading, Some(Role::Athlete)),
        RouteDecision::Wait
    );
}

#[test]
fn signed_out_visitors_go_to_login() {
    assert_eq!(
        decide_route(&SessionState::Unauthenticated, None),
        RouteDecision::RedirectToLogin
    );
    assert_eq!(
        decide_route(&SessionState::Unauthenticated, Some(Role::Fan)),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn no_required_role_renders_for_any_signed_in_user() {
    for role in ALL_ROLES {
        assert_eq!(decide_route(&authenticated(role), None), RouteDecision::Render);
    }
}

#[test]
fn matching_role_renders() {
    assert_eq!(
        decide_route(&authenticated(Role::Sponsor), Some(Role::Sponsor)),
        RouteDecision::Render
    );
}

#[test]
fn mismatched_role_is_steered_to_its_own_dashboard() {
    // A sponsor opening an athlete-only view goes to the sponsor
    // dashboard, not to an error page.
    assert_eq!(
        decide_route(&authenticated(Role::Sponsor), Some(Role::Athlete)),
        RouteDecision::RedirectTo("/dashboard/sponsor")
    );
}

#[test]
fn student_athletes_may_enter_athlete_views() {
    assert_eq!(
        decide_route(&authenticated(Role::StudentAthlete), Some(Role::Athlete)),
        RouteDecision::Render
    );
}

#[test]
fn redirects_can_never_loop() {
    // Wherever a mismatched user is sent, the view at that path must admit
    // them, so following one redirect always terminates.
    for role in ALL_ROLES {
        for required in ALL_ROLES {
            if let RouteDecision::RedirectTo(path) =
                decide_route(&authenticated(role), Some(required))
            {
                assert_eq!(
                    decide_route(&authenticated(role), Some(declared_requirement(path))),
                    RouteDecision::Render,
                    "role {role:?} bounced from {required:?} must be admitted at {path}"
                );
            }
        }
    }
}
