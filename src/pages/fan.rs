//! Fan dashboard: a read-only window onto the marketplace.

use leptos::prelude::*;

use crate::components::deal_card::DealCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::protected::Protected;
use crate::net::deals;
use crate::net::types::Role;

#[component]
pub fn FanDashboardPage() -> impl IntoView {
    view! {
        <Protected required_role=Role::Fan>
            <FanDashboard/>
        </Protected>
    }
}

#[component]
fn FanDashboard() -> impl IntoView {
    let open_deals = LocalResource::new(|| async {
        match deals::fetch_open_deals().await {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("deal list failed: {err}");
                Vec::new()
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Fan Dashboard"</h1>
                <a class="btn" href="/marketplace">"Full marketplace"</a>
            </header>
            <section class="dashboard-page__deals">
                <h2>"Latest Deals"</h2>
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || {
                        open_deals.get().map(|list| {
                            view! {
                                <div class="deal-grid">
                                    {list
                                        .into_iter()
                                        .take(6)
                                        .map(|deal| view! { <DealCard deal=deal/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
