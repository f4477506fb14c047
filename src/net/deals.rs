//! Marketplace-service gateway: deals and earnings.
//!
//! Same discipline as the identity gateway: gloo-net in the browser, stubs
//! on the server, every failure normalized into [`ApiError`]. Callers are
//! expected to report authenticated-call failures to the session so a 401
//! can invalidate it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "deals_test.rs"]
mod deals_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::api::bearer;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::config::MARKET_SERVICE_BASE;

/// Where a deal sits in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Open,
    Claimed,
    Completed,
    #[serde(other)]
    Unknown,
}

/// A sponsorship deal as listed in the marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DealSummary {
    pub id: String,
    /// Short pitch line, e.g. `"Game-day social post"`.
    pub title: String,
    /// Sponsor's display name.
    pub sponsor_name: String,
    /// Offered payout in dollars.
    pub amount_usd: f64,
    pub status: DealStatus,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for posting a new deal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewDeal {
    pub title: String,
    pub amount_usd: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Aggregated athlete earnings as reported by the marketplace service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Lifetime earnings in dollars, paid and pending together.
    pub total_usd: f64,
    /// Portion not yet paid out.
    pub pending_usd: f64,
    pub deals_completed: u32,
}

impl EarningsSummary {
    /// Dollars already paid out.
    pub fn paid_usd(&self) -> f64 {
        (self.total_usd - self.pending_usd).max(0.0)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn open_deals_endpoint() -> String {
    format!("{MARKET_SERVICE_BASE}/deals?status=open")
}

#[cfg(any(test, feature = "hydrate"))]
fn deals_endpoint() -> String {
    format!("{MARKET_SERVICE_BASE}/deals")
}

#[cfg(any(test, feature = "hydrate"))]
fn claim_endpoint(deal_id: &str) -> String {
    format!("{MARKET_SERVICE_BASE}/deals/{deal_id}/claim")
}

#[cfg(any(test, feature = "hydrate"))]
fn earnings_endpoint() -> String {
    format!("{MARKET_SERVICE_BASE}/earnings")
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Service { status: resp.status(), message }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// List deals still open for claiming. Public; no credential required.
///
/// # Errors
///
/// Normalized [`ApiError`] on any failure.
pub async fn fetch_open_deals() -> Result<Vec<DealSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&open_deals_endpoint())
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp, "could not load deals").await);
        }
        resp.json::<Vec<DealSummary>>().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Claim an open deal for the signed-in athlete.
///
/// # Errors
///
/// Normalized [`ApiError`]; a 401 should be reported to the session.
pub async fn claim_deal(token: &str, deal_id: &str) -> Result<DealSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&claim_endpoint(deal_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp, "claim failed").await);
        }
        resp.json::<DealSummary>().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, deal_id);
        Err(unavailable())
    }
}

/// Post a new deal as the signed-in sponsor.
///
/// # Errors
///
/// Normalized [`ApiError`]; a 401 should be reported to the session.
pub async fn create_deal(token: &str, deal: &NewDeal) -> Result<DealSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&deals_endpoint())
            .header("Authorization", &bearer(token))
            .json(deal)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp, "could not post deal").await);
        }
        resp.json::<DealSummary>().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, deal);
        Err(unavailable())
    }
}

/// Fetch the signed-in athlete's earnings summary.
///
/// # Errors
///
/// Normalized [`ApiError`]; a 401 should be reported to the session.
pub async fn fetch_earnings(token: &str) -> Result<EarningsSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&earnings_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp, "could not load earnings").await);
        }
        resp.json::<EarningsSummary>().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}
