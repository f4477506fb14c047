//! Sponsor dashboard: post deals and watch the open market.

use leptos::prelude::*;

use crate::components::deal_card::DealCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::protected::Protected;
use crate::net::deals;
#[cfg(feature = "hydrate")]
use crate::net::deals::NewDeal;
use crate::net::types::Role;
use crate::state::session::Session;

#[component]
pub fn SponsorDashboardPage() -> impl IntoView {
    view! {
        <Protected required_role=Role::Sponsor>
            <SponsorDashboard/>
        </Protected>
    }
}

#[component]
fn SponsorDashboard() -> impl IntoView {
    let session = Session::expect();

    let title = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let open_deals = LocalResource::new(|| async {
        match deals::fetch_open_deals().await {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("deal list failed: {err}");
                Vec::new()
            }
        }
    });

    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let title_value = title.get_untracked().trim().to_owned();
        let Ok(amount_value) = amount.get_untracked().trim().parse::<f64>() else {
            message.set("Enter the payout as a dollar amount.".to_owned());
            return;
        };
        if title_value.is_empty() || amount_value <= 0.0 {
            message.set("A deal needs a title and a positive payout.".to_owned());
            return;
        }
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.token_snapshot() else {
                busy.set(false);
                return;
            };
            let deal = NewDeal {
                title: title_value,
                amount_usd: amount_value,
                description: {
                    let text = description.get_untracked().trim().to_owned();
                    (!text.is_empty()).then_some(text)
                },
            };
            leptos::task::spawn_local(async move {
                match deals::create_deal(&token, &deal).await {
                    Ok(_) => {
                        title.set(String::new());
                        amount.set(String::new());
                        description.set(String::new());
                        message.set("Deal posted.".to_owned());
                        session.extend();
                        open_deals.refetch();
                    }
                    Err(err) => {
                        session.observe_api_error(&err);
                        message.set(err.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title_value, session);
            busy.set(false);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Sponsor Dashboard"</h1>
            </header>

            <section class="dashboard-page__post">
                <h2>"Post a Deal"</h2>
                <form class="deal-form" on:submit=on_post>
                    <input
                        class="deal-form__input"
                        type="text"
                        placeholder="Deal title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        class="deal-form__input"
                        type="text"
                        placeholder="Payout (USD)"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <textarea
                        class="deal-form__input"
                        placeholder="What do you need from the athlete?"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Post Deal"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="dashboard-page__message">{move || message.get()}</p>
                </Show>
            </section>

            <section class="dashboard-page__deals">
                <h2>"Open on the Marketplace"</h2>
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || {
                        open_deals.get().map(|list| {
                            view! {
                                <div class="deal-grid">
                                    {list
                                        .into_iter()
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
