//! Identity-service gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning the network-error variant, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here throws past the module boundary. Every failure becomes an
//! [`ApiError`] value: service rejections keep the service-provided
//! message and status so the UI can render them verbatim, while transport
//! failures map to the distinct `Network` kind so callers can tell "wrong
//! password" from "service unreachable."

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::Deserialize;

use crate::net::types::{RegisterRequest, Role, User};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::config::AUTH_SERVICE_BASE;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::token;

/// Uniform failure value for every service call the client makes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// No usable response arrived at all.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered success but the issued credential could not be
    /// decoded or carried no role.
    #[error("received an unusable credential")]
    BadCredential,
    /// A sign-out superseded this operation while it was in flight; its
    /// result was discarded.
    #[error("operation was interrupted by sign-out")]
    Interrupted,
}

impl ApiError {
    /// Whether this failure means the credential was rejected outright.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Service { status: 401, .. })
    }
}

/// Everything a successful sign-in yields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthGrant {
    pub user: User,
    pub role: Role,
    pub token: String,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{AUTH_SERVICE_BASE}/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{AUTH_SERVICE_BASE}/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint() -> String {
    format!("{AUTH_SERVICE_BASE}/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn me_endpoint() -> String {
    format!("{AUTH_SERVICE_BASE}/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_endpoint() -> String {
    format!("{AUTH_SERVICE_BASE}/refresh")
}

#[cfg(any(test, feature = "hydrate"))]
fn password_reset_endpoint() -> String {
    format!("{AUTH_SERVICE_BASE}/password-reset-request")
}

/// `Authorization` header value for an issued credential.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Form-encoded sign-in body, per the identity service's password grant.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(email: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    )
}

/// Service-provided failure message, or the operation's generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(detail: Option<String>, fallback: &str) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => detail,
        _ => fallback.to_owned(),
    }
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
    ApiError::Service {
        status: resp.status(),
        message: rejection_message(detail, fallback),
    }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Decode an issued credential into the normalized sign-in triple.
///
/// Fails with [`ApiError::BadCredential`] when the payload cannot be
/// decoded or asserts no role — the session must never authenticate from
/// such a credential.
#[cfg(any(test, feature = "hydrate"))]
fn grant_from_token(token: String) -> Result<AuthGrant, ApiError> {
    let claims = token::decode_claims(&token).ok_or(ApiError::BadCredential)?;
    let (user, role) = token::identity_from_claims(&claims).ok_or(ApiError::BadCredential)?;
    Ok(AuthGrant { user, role, token })
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Service rejections carry the `detail` message when the service sent
/// one; transport failures are `Network`; an undecodable issued credential
/// is `BadCredential`.
pub async fn login(email: &str, password: &str) -> Result<AuthGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(login_form_body(email, password))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "login failed").await);
        }
        let body: TokenResponse = resp.json().await.map_err(network)?;
        grant_from_token(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(unavailable())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// Registration never signs the caller in; obtaining a credential is a
/// separate, explicit [`login`] afterwards.
///
/// # Errors
///
/// Same normalization as [`login`].
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&register_endpoint())
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "registration failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Ask the identity service to invalidate the session, best effort.
///
/// The outcome is deliberately ignored: local sign-out must never be gated
/// on this call reaching the service.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&logout_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Revalidate a stored credential via `GET /api/auth/me`.
///
/// Client-side decoding cannot see server-side revocation, so the session
/// only authenticates from storage once this call succeeds.
///
/// # Errors
///
/// A 401 means the credential is no longer honored; other failures follow
/// the usual normalization.
pub async fn fetch_current_user(token: &str) -> Result<AuthGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&me_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "session is no longer valid").await);
        }
        let user: User = resp.json().await.map_err(network)?;
        let role = user.role;
        Ok(AuthGrant { user, role, token: token.to_owned() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Exchange the current credential for a fresh one via `POST /api/auth/refresh`.
///
/// # Errors
///
/// Same normalization as [`login`].
pub async fn refresh(token: &str) -> Result<AuthGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&refresh_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "could not extend session").await);
        }
        let body: TokenResponse = resp.json().await.map_err(network)?;
        grant_from_token(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Request a password-reset email via `POST /api/auth/password-reset-request`.
///
/// The reset itself completes through the emailed link; nothing else
/// happens client-side.
///
/// # Errors
///
/// Same normalization as [`login`].
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&password_reset_endpoint())
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "password reset request failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(unavailable())
    }
}
