//! Athlete dashboard: earnings summary and claimable deals.

use leptos::prelude::*;

use crate::components::deal_card::DealCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::protected::Protected;
use crate::net::deals;
use crate::net::types::Role;
use crate::state::session::Session;

#[component]
pub fn AthleteDashboardPage() -> impl IntoView {
    view! {
        <Protected required_role=Role::Athlete>
            <AthleteDashboard/>
        </Protected>
    }
}

#[component]
fn AthleteDashboard() -> impl IntoView {
    let session = Session::expect();
    let claim_error = RwSignal::new(String::new());

    let earnings = LocalResource::new(move || {
        let token = session.current().token().map(ToOwned::to_owned);
        async move {
            let token = token?;
            match deals::fetch_earnings(&token).await {
                Ok(summary) => Some(summary),
                Err(err) => {
                    session.observe_api_error(&err);
                    leptos::logging::warn!("earnings fetch failed: {err}");
                    None
                }
            }
        }
    });

    let open_deals = LocalResource::new(|| async {
        match deals::fetch_open_deals().await {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("deal list failed: {err}");
                Vec::new()
            }
        }
    });

    let on_claim = Callback::new(move |deal_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.token_snapshot() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match deals::claim_deal(&token, &deal_id).await {
                    Ok(_) => {
                        claim_error.set(String::new());
                        session.extend();
                        open_deals.refetch();
                        earnings.refetch();
                    }
                    Err(err) => {
                        session.observe_api_error(&err);
                        claim_error.set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = deal_id;
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Athlete Dashboard"</h1>
            </header>

            <section class="dashboard-page__earnings">
                <h2>"Earnings"</h2>
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || {
                        earnings.get().map(|summary| match summary {
                            Some(summary) => {
                                view! {
                                    <div class="stat-grid">
                                        <div class="stat-card">
                                            <span class="stat-card__label">"Total"</span>
                                            <span class="stat-card__value">
                                                {format!("${:.2}", summary.total_usd)}
                                            </span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__label">"Paid out"</span>
                                            <span class="stat-card__value">
                                                {format!("${:.2}", summary.paid_usd())}
                                            </span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__label">"Pending"</span>
                                            <span class="stat-card__value">
                                                {format!("${:.2}", summary.pending_usd)}
                                            </span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__label">"Deals completed"</span>
                                            <span class="stat-card__value">
                                                {summary.deals_completed}
                                            </span>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Earnings are unavailable right now."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__deals">
                <h2>"Open Deals"</h2>
                <Show when=move || !claim_error.get().is_empty()>
                    <p class="dashboard-page__error">{move || claim_error.get()}</p>
                </Show>
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || {
                        open_deals.get().map(|list| {
                            if list.is_empty() {
                                view! { <p>"No open deals right now. Check back soon."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="deal-grid">
                                        {list
                                            .into_iter()
                                            .map(|deal| {
                                                view! { <DealCard deal=deal on_claim=on_claim/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
