use super::*;

// =============================================================
// validate_registration
// =============================================================

#[test]
fn valid_form_passes() {
    assert_eq!(
        validate_registration("Ava Jones", "a@x.com", "secret1", "secret1"),
        Ok(())
    );
}

#[test]
fn blank_name_is_rejected() {
    assert!(validate_registration("   ", "a@x.com", "secret1", "secret1").is_err());
}

#[test]
fn email_without_at_sign_is_rejected() {
    assert!(validate_registration("Ava", "not-an-email", "secret1", "secret1").is_err());
}

#[test]
fn short_password_is_rejected() {
    assert!(validate_registration("Ava", "a@x.com", "12345", "12345").is_err());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert!(validate_registration("Ava", "a@x.com", "secret1", "secret2").is_err());
}

// =============================================================
// Role selection
// =============================================================

#[test]
fn selectable_roles_survive_the_select_round_trip() {
    for role in SELECTABLE_ROLES {
        assert_eq!(Role::parse(role.as_str()), role);
    }
}

#[test]
fn fan_is_the_default_selection() {
    assert_eq!(SELECTABLE_ROLES[0], Role::Fan);
}
