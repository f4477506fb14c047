//! Marketplace deal card.

use leptos::prelude::*;

use crate::net::deals::{DealStatus, DealSummary};

/// One deal in a marketplace or dashboard grid. Renders a claim button
/// only when the deal is open and a claim handler was supplied.
#[component]
pub fn DealCard(
    deal: DealSummary,
    #[prop(optional, into)] on_claim: Option<Callback<String>>,
) -> impl IntoView {
    let claimable = on_claim.is_some() && deal.status == DealStatus::Open;
    let deal_id = deal.id.clone();
    let status_label = match deal.status {
        DealStatus::Open => "Open",
        DealStatus::Claimed => "Claimed",
        DealStatus::Completed => "Completed",
        DealStatus::Unknown => "Pending",
    };

    view! {
        <div class="deal-card">
            <div class="deal-card__header">
                <h3 class="deal-card__title">{deal.title.clone()}</h3>
                <span class="deal-card__status">{status_label}</span>
            </div>
            <p class="deal-card__sponsor">{deal.sponsor_name.clone()}</p>
            {deal
                .description
                .clone()
                .map(|text| view! { <p class="deal-card__description">{text}</p> })}
            <div class="deal-card__footer">
                <span class="deal-card__amount">{format!("${:.2}", deal.amount_usd)}</span>
                <Show when=move || claimable>
                    <button
                        class="btn btn--primary"
                        on:click={
                            let deal_id = deal_id.clone();
                            move |_| {
                                if let Some(on_claim) = on_claim {
                                    on_claim.run(deal_id.clone());
                                }
                            }
                        }
                    >
                        "Claim"
                    </button>
                </Show>
            </div>
        </div>
    }
}
