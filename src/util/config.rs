//! Client-side configuration constants.
//!
//! The deployed app is served behind the same origin as its backing
//! services, so service bases are plain path prefixes. Overriding any of
//! these means rebuilding the bundle; there is deliberately no runtime
//! configuration surface in the browser.

/// Path prefix of the identity service.
pub const AUTH_SERVICE_BASE: &str = "/api/auth";

/// Path prefix of the marketplace service.
pub const MARKET_SERVICE_BASE: &str = "/api";

/// localStorage key holding the raw credential string.
///
/// This is the only persisted session state; user and role are always
/// re-derived from the credential so the two can never diverge.
pub const TOKEN_STORAGE_KEY: &str = "nilbx_token";

/// Idle session lifetime in milliseconds. A non-positive value disables
/// forced expiry entirely.
pub const SESSION_TIMEOUT_MS: i64 = 3_600_000;
