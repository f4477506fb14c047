use super::*;

use crate::net::api::ApiError;

fn athlete_grant() -> AuthGrant {
    AuthGrant {
        user: User {
            id: "u1".to_owned(),
            email: "a@x.com".to_owned(),
            name: Some("Ava".to_owned()),
            role: Role::Athlete,
        },
        role: Role::Athlete,
        token: "h.p.s".to_owned(),
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = SessionState::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn non_authenticated_states_expose_no_identity() {
    for state in [SessionState::Unauthenticated, SessionState::Loading] {
        assert_eq!(state.user(), None);
        assert_eq!(state.role(), None);
        assert_eq!(state.token(), None);
    }
}

#[test]
fn authenticated_state_exposes_the_full_triple() {
    let grant = athlete_grant();
    let state = SessionState::Authenticated(Account {
        user: grant.user.clone(),
        role: grant.role,
        token: grant.token.clone(),
    });
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Athlete));
    assert_eq!(state.user().map(|u| u.email.as_str()), Some("a@x.com"));
    assert_eq!(state.token(), Some("h.p.s"));
}

// =============================================================
// Session controller transitions
// =============================================================

#[test]
fn install_authenticates_the_session() {
    let session = Session::new();
    session.install(athlete_grant());
    let state = session.watch().get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(session.token_snapshot().as_deref(), Some("h.p.s"));
}

#[test]
fn logout_is_idempotent() {
    let session = Session::new();
    session.install(athlete_grant());
    session.logout();
    assert!(!session.watch().get_untracked().is_authenticated());
    // Second sign-out while already signed out must be a quiet no-op.
    session.logout();
    assert_eq!(session.watch().get_untracked(), SessionState::Unauthenticated);
}

#[test]
fn expire_signs_out_an_authenticated_session() {
    let session = Session::new();
    session.install(athlete_grant());
    session.expire();
    assert_eq!(session.watch().get_untracked(), SessionState::Unauthenticated);
}

#[test]
fn expire_does_not_disturb_a_loading_session() {
    let session = Session::new();
    session.expire();
    assert!(session.watch().get_untracked().is_loading());
}

#[test]
fn expiry_racing_an_explicit_sign_out_is_harmless() {
    let session = Session::new();
    session.install(athlete_grant());
    session.logout();
    session.expire();
    assert_eq!(session.watch().get_untracked(), SessionState::Unauthenticated);
}

#[test]
fn observed_401_invalidates_the_session() {
    let session = Session::new();
    session.install(athlete_grant());
    session.observe_api_error(&ApiError::Service {
        status: 401,
        message: "credential expired".to_owned(),
    });
    assert_eq!(session.watch().get_untracked(), SessionState::Unauthenticated);
}

#[test]
fn observed_non_401_failures_keep_the_session() {
    let session = Session::new();
    session.install(athlete_grant());
    session.observe_api_error(&ApiError::Service { status: 500, message: "oops".to_owned() });
    session.observe_api_error(&ApiError::Network("offline".to_owned()));
    assert!(session.watch().get_untracked().is_authenticated());
}

#[test]
fn extend_when_signed_out_is_a_no_op() {
    let session = Session::new();
    session.extend();
    assert!(session.watch().get_untracked().is_loading());
}

// =============================================================
// Cross-tab coordination
// =============================================================

#[test]
fn cross_tab_ignores_other_keys() {
    assert_eq!(cross_tab_action(Some("nilbx_theme"), true, true), CrossTabAction::Ignore);
    assert_eq!(cross_tab_action(None, false, true), CrossTabAction::Ignore);
}

#[test]
fn cross_tab_sign_out_when_credential_cleared_elsewhere() {
    assert_eq!(cross_tab_action(Some("nilbx_token"), false, true), CrossTabAction::SignOut);
}

#[test]
fn cross_tab_adopts_credential_written_elsewhere() {
    assert_eq!(cross_tab_action(Some("nilbx_token"), true, false), CrossTabAction::Adopt);
}

#[test]
fn cross_tab_no_op_when_states_already_agree() {
    assert_eq!(cross_tab_action(Some("nilbx_token"), true, true), CrossTabAction::Ignore);
    assert_eq!(cross_tab_action(Some("nilbx_token"), false, false), CrossTabAction::Ignore);
}

#[test]
fn external_sign_out_event_ends_the_session() {
    let session = Session::new();
    session.install(athlete_grant());
    session.sync_external_credential(Some("nilbx_token"), None);
    assert_eq!(session.watch().get_untracked(), SessionState::Unauthenticated);
}
