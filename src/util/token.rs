//! Credential decoding helpers.
//!
//! The identity service issues a compact three-segment credential
//! (`header.payload.signature`, base64url). The client decodes the payload
//! purely for UX — choosing a landing page, pre-filling identity — and
//! never verifies the signature; the server stays the authority on whether
//! a credential is actually good.
//!
//! ERROR HANDLING
//! ==============
//! Every decoding failure collapses to `None`. A credential that cannot be
//! decoded is treated exactly like a missing one; callers never see a
//! panic or an error value from this module.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::net::types::{Role, User};

/// Decoded payload fields of a credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier; the account email.
    pub sub: String,
    /// Account role as issued, if any. Kept as the raw wire string so an
    /// unrecognized value stays distinguishable from an absent claim.
    #[serde(default)]
    pub role: Option<String>,
    /// Display name, if the issuer included one.
    #[serde(default)]
    pub name: Option<String>,
    /// Expiry in epoch seconds, if the issuer set one.
    #[serde(default)]
    pub exp: Option<i64>,
    /// Stable account id; falls back to `sub` when absent.
    #[serde(default)]
    pub id: Option<String>,
}

/// Decode the payload segment of a credential.
///
/// Returns `None` for any malformed input: wrong segment count, invalid
/// base64url, or a payload that is not the expected JSON shape.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };

    // Issuers vary on padding; the unpadded engine rejects trailing `=`.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether `claims` carries an expiry strictly in the past.
///
/// An absent `exp` never expires; `now` is epoch seconds.
pub fn is_expired(claims: &Claims, now: i64) -> bool {
    claims.exp.is_some_and(|exp| exp < now)
}

/// The role asserted by `claims`, if any.
///
/// Absence of the claim is distinct from a malformed credential: the former
/// yields `None` here, the latter never produces a `Claims` at all.
/// Unrecognized role strings map to [`Role::Unknown`].
pub fn derive_role(claims: &Claims) -> Option<Role> {
    claims.role.as_deref().map(Role::parse)
}

/// Build the account identity a credential asserts.
///
/// Returns `None` when the credential carries no role claim — a session is
/// never allowed to authenticate without one.
pub fn identity_from_claims(claims: &Claims) -> Option<(User, Role)> {
    let role = derive_role(claims)?;
    let user = User {
        id: claims.id.clone().unwrap_or_else(|| claims.sub.clone()),
        email: claims.sub.clone(),
        name: claims.name.clone(),
        role,
    };
    Some((user, role))
}

/// Disposition of a credential found in storage at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredCredential {
    /// Nothing stored.
    Missing,
    /// Stored but unusable: malformed, expired, or missing a role claim.
    /// Must be cleared without contacting the identity service.
    Invalid,
    /// Decodes cleanly and is not expired; still needs server-side
    /// revalidation before the session may authenticate.
    Usable(Claims),
}

/// Classify a stored credential ahead of startup revalidation.
pub fn evaluate_stored(raw: Option<&str>, now: i64) -> StoredCredential {
    let Some(raw) = raw else {
        return StoredCredential::Missing;
    };
    let Some(claims) = decode_claims(raw) else {
        return StoredCredential::Invalid;
    };
    if is_expired(&claims, now) || derive_role(&claims).is_none() {
        return StoredCredential::Invalid;
    }
    StoredCredential::Usable(claims)
}

/// Current time in epoch seconds.
pub fn now_epoch_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
