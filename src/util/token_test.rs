use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn encode_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.sig")
}

fn athlete_claims(exp: Option<i64>) -> serde_json::Value {
    serde_json::json!({
        "sub": "a@x.com",
        "role": "athlete",
        "name": "Ava",
        "exp": exp,
    })
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_claims_round_trips_known_payload() {
    let token = encode_token(&athlete_claims(Some(4_102_444_800)));
    let claims = decode_claims(&token).expect("decodes");
    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.role.as_deref(), Some("athlete"));
    assert_eq!(claims.name.as_deref(), Some("Ava"));
    assert_eq!(claims.exp, Some(4_102_444_800));
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    assert_eq!(decode_claims(""), None);
    assert_eq!(decode_claims("only-one-segment"), None);
    assert_eq!(decode_claims("two.segments"), None);
    assert_eq!(decode_claims("a.b.c.d"), None);
}

#[test]
fn decode_claims_rejects_invalid_base64() {
    assert_eq!(decode_claims("header.!!not-base64!!.sig"), None);
}

#[test]
fn decode_claims_rejects_invalid_json_payload() {
    let body = URL_SAFE_NO_PAD.encode(b"not json at all");
    assert_eq!(decode_claims(&format!("h.{body}.s")), None);
}

#[test]
fn decode_claims_rejects_payload_without_subject() {
    let body = URL_SAFE_NO_PAD.encode(br#"{"role":"fan"}"#);
    assert_eq!(decode_claims(&format!("h.{body}.s")), None);
}

#[test]
fn decode_claims_tolerates_base64_padding() {
    let padded = base64::engine::general_purpose::URL_SAFE
        .encode(br#"{"sub":"a@x.com","role":"fan"}"#);
    let claims = decode_claims(&format!("h.{padded}.s")).expect("decodes");
    assert_eq!(claims.sub, "a@x.com");
}

// =============================================================
// is_expired
// =============================================================

#[test]
fn expiry_strictly_before_now_is_expired() {
    let claims = decode_claims(&encode_token(&athlete_claims(Some(999)))).unwrap();
    assert!(is_expired(&claims, 1000));
}

#[test]
fn expiry_after_now_is_not_expired() {
    let claims = decode_claims(&encode_token(&athlete_claims(Some(1001)))).unwrap();
    assert!(!is_expired(&claims, 1000));
}

#[test]
fn expiry_equal_to_now_is_not_expired() {
    let claims = decode_claims(&encode_token(&athlete_claims(Some(1000)))).unwrap();
    assert!(!is_expired(&claims, 1000));
}

#[test]
fn absent_expiry_never_expires() {
    let claims = decode_claims(&encode_token(&athlete_claims(None))).unwrap();
    assert!(!is_expired(&claims, i64::MAX));
}

// =============================================================
// derive_role / identity_from_claims
// =============================================================

#[test]
fn derive_role_maps_known_role() {
    let claims = decode_claims(&encode_token(&athlete_claims(None))).unwrap();
    assert_eq!(derive_role(&claims), Some(Role::Athlete));
}

#[test]
fn derive_role_absent_claim_is_none() {
    let body = URL_SAFE_NO_PAD.encode(br#"{"sub":"a@x.com"}"#);
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(derive_role(&claims), None);
}

#[test]
fn derive_role_unrecognized_string_is_unknown() {
    let body = URL_SAFE_NO_PAD.encode(br#"{"sub":"a@x.com","role":"mascot"}"#);
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(derive_role(&claims), Some(Role::Unknown));
}

#[test]
fn identity_uses_id_claim_when_present() {
    let body = URL_SAFE_NO_PAD.encode(br#"{"sub":"a@x.com","role":"fan","id":"u-42"}"#);
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    let (user, role) = identity_from_claims(&claims).expect("has role");
    assert_eq!(user.id, "u-42");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(role, Role::Fan);
}

#[test]
fn identity_falls_back_to_subject_for_id() {
    let claims = decode_claims(&encode_token(&athlete_claims(None))).unwrap();
    let (user, _) = identity_from_claims(&claims).expect("has role");
    assert_eq!(user.id, "a@x.com");
}

#[test]
fn identity_requires_role_claim() {
    let body = URL_SAFE_NO_PAD.encode(br#"{"sub":"a@x.com"}"#);
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(identity_from_claims(&claims), None);
}

// =============================================================
// evaluate_stored
// =============================================================

#[test]
fn evaluate_stored_nothing_is_missing() {
    assert_eq!(evaluate_stored(None, 1000), StoredCredential::Missing);
}

#[test]
fn evaluate_stored_malformed_is_invalid() {
    assert_eq!(evaluate_stored(Some("garbage"), 1000), StoredCredential::Invalid);
}

#[test]
fn evaluate_stored_expired_is_invalid() {
    let token = encode_token(&athlete_claims(Some(999)));
    assert_eq!(evaluate_stored(Some(&token), 1000), StoredCredential::Invalid);
}

#[test]
fn evaluate_stored_roleless_is_invalid() {
    let body = URL_SAFE_NO_PAD.encode(br#"{"sub":"a@x.com","exp":2000}"#);
    let token = format!("h.{body}.s");
    assert_eq!(evaluate_stored(Some(&token), 1000), StoredCredential::Invalid);
}

#[test]
fn evaluate_stored_live_token_is_usable() {
    let token = encode_token(&athlete_claims(Some(2000)));
    match evaluate_stored(Some(&token), 1000) {
        StoredCredential::Usable(claims) => assert_eq!(claims.sub, "a@x.com"),
        other => panic!("expected usable, got {other:?}"),
    }
}
