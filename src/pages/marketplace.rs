//! Public marketplace: anyone can browse; signed-in athletes can claim.

use leptos::prelude::*;

use crate::components::deal_card::DealCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::deals;
use crate::net::types::Role;
use crate::state::session::Session;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let session = Session::expect();
    let claim_error = RwSignal::new(String::new());

    let open_deals = LocalResource::new(|| async {
        match deals::fetch_open_deals().await {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("deal list failed: {err}");
                Vec::new()
            }
        }
    });

    // Athletes claim inline; everyone else just browses.
    let can_claim = move || {
        matches!(
            session.current().role(),
            Some(Role::Athlete | Role::StudentAthlete)
        )
    };

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
                    }
                    Err(err) => {
                        session.observe_api_error(&err);
                        claim_error.set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (deal_id, claim_error);
    });

    view! {
        <div class="marketplace-page">
            <header class="marketplace-page__header">
                <h1>"Marketplace"</h1>
                <Show when=move || !session.current().is_authenticated()>
                    <p class="marketplace-page__hint">
                        <a href="/auth">"Sign in"</a> " as an athlete to claim deals."
                    </p>
                </Show>
            </header>
            <Show when=move || !claim_error.get().is_empty()>
                <p class="marketplace-page__error">{move || claim_error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <LoadingSpinner/> }>
                {move || {
                    open_deals.get().map(|list| {
                        if list.is_empty() {
                            view! { <p>"Nothing is open right now. Check back soon."</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="deal-grid">
                                    {list
                                        .into_iter()
                                        .map(|deal| {
                                            if can_claim() {
                                                view! { <DealCard deal=deal on_claim=on_claim/> }
                                                    .into_any()
                                            } else {
                                                view! { <DealCard deal=deal/> }.into_any()
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
