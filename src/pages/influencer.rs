//! Influencer dashboard.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::net::types::Role;
use crate::state::session::Session;

#[component]
pub fn InfluencerDashboardPage() -> impl IntoView {
    view! {
        <Protected required_role=Role::Influencer>
            <InfluencerDashboard/>
        </Protected>
    }
}

#[component]
fn InfluencerDashboard() -> impl IntoView {
    let session = Session::expect();
    let greeting = move || {
        let state = session.current();
        state
            .user()
            .map(|u| format!("Welcome back, {}.", u.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Influencer Dashboard"</h1>
            </header>
            <p class="dashboard-page__greeting">{greeting}</p>
            <section class="dashboard-page__cta">
                <p>"Brand collaborations land in the marketplace first."</p>
                <a class="btn btn--primary" href="/marketplace">"Browse deals"</a>
            </section>
        </div>
    }
}
