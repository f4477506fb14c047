use super::*;

// =============================================================
// Role wire format
// =============================================================

#[test]
fn role_deserializes_snake_case() {
    let role: Role = serde_json::from_str("\"student_athlete\"").unwrap();
    assert_eq!(role, Role::StudentAthlete);
}

#[test]
fn role_deserializes_unknown_string_to_fallback() {
    let role: Role = serde_json::from_str("\"team_mascot\"").unwrap();
    assert_eq!(role, Role::Unknown);
}

#[test]
fn role_parse_matches_serde_for_known_roles() {
    for raw in [
        "athlete",
        "student_athlete",
        "sponsor",
        "fan",
        "influencer",
        "admin",
        "school_admin",
        "agency",
    ] {
        let via_serde: Role = serde_json::from_str(&format!("\"{raw}\"")).unwrap();
        assert_eq!(Role::parse(raw), via_serde);
        assert_eq!(Role::parse(raw).as_str(), raw);
    }
}

#[test]
fn role_parse_unrecognized_is_unknown() {
    assert_eq!(Role::parse("ATHLETE"), Role::Unknown);
    assert_eq!(Role::parse(""), Role::Unknown);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_without_name() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"a@x.com","role":"athlete"}"#).unwrap();
    assert_eq!(user.name, None);
    assert_eq!(user.role, Role::Athlete);
}

#[test]
fn display_name_prefers_explicit_name() {
    let user = User {
        id: "u1".to_owned(),
        email: "ava@x.com".to_owned(),
        name: Some("Ava Jones".to_owned()),
        role: Role::Athlete,
    };
    assert_eq!(user.display_name(), "Ava Jones");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let user = User {
        id: "u1".to_owned(),
        email: "ava@x.com".to_owned(),
        name: None,
        role: Role::Fan,
    };
    assert_eq!(user.display_name(), "ava");
}

#[test]
fn register_request_serializes_role_as_snake_case() {
    let req = RegisterRequest {
        name: "Ava".to_owned(),
        email: "a@x.com".to_owned(),
        password: "secret".to_owned(),
        role: Role::StudentAthlete,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["role"], "student_athlete");
}
