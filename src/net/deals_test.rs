use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn open_deals_endpoint_filters_by_status() {
    assert_eq!(open_deals_endpoint(), "/api/deals?status=open");
}

#[test]
fn claim_endpoint_embeds_deal_id() {
    assert_eq!(claim_endpoint("d-17"), "/api/deals/d-17/claim");
}

#[test]
fn earnings_endpoint_lives_under_market_base() {
    assert_eq!(earnings_endpoint(), "/api/earnings");
}

// =============================================================
// DTOs
// =============================================================

#[test]
fn deal_summary_deserializes_service_payload() {
    let deal: DealSummary = serde_json::from_str(
        r#"{
            "id": "d-1",
            "title": "Game-day social post",
            "sponsor_name": "Acme Sports",
            "amount_usd": 250.0,
            "status": "open"
        }"#,
    )
    .unwrap();
    assert_eq!(deal.status, DealStatus::Open);
    assert_eq!(deal.description, None);
}

#[test]
fn unrecognized_deal_status_folds_to_unknown() {
    let deal: DealSummary = serde_json::from_str(
        r#"{
            "id": "d-2",
            "title": "Autograph session",
            "sponsor_name": "Acme Sports",
            "amount_usd": 100.0,
            "status": "in_escrow"
        }"#,
    )
    .unwrap();
    assert_eq!(deal.status, DealStatus::Unknown);
}

// =============================================================
// Earnings math
// =============================================================

#[test]
fn paid_is_total_minus_pending() {
    let earnings = EarningsSummary { total_usd: 1200.0, pending_usd: 300.0, deals_completed: 4 };
    assert!((earnings.paid_usd() - 900.0).abs() < f64::EPSILON);
}

#[test]
fn paid_never_goes_negative() {
    let earnings = EarningsSummary { total_usd: 100.0, pending_usd: 250.0, deals_completed: 1 };
    assert!(earnings.paid_usd().abs() < f64::EPSILON);
}
