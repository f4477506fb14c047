//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <h1>"Own your name, image, and likeness."</h1>
                <p class="landing-hero__subtitle">
                    "NILbx connects athletes, sponsors, and fans around NIL deals "
                    "with transparent payouts."
                </p>
                <div class="landing-hero__actions">
                    <a class="btn btn--primary" href="/register">"Get started"</a>
                    <a class="btn" href="/marketplace">"Browse deals"</a>
                </div>
            </section>
            <section class="landing-roles">
                <div class="landing-roles__card">
                    <h2>"Athletes"</h2>
                    <p>"Claim deals, track earnings, and build your brand."</p>
                </div>
                <div class="landing-roles__card">
                    <h2>"Sponsors"</h2>
                    <p>"Post deals and reach athletes directly."</p>
                </div>
                <div class="landing-roles__card">
                    <h2>"Fans"</h2>
                    <p>"Follow your favorite athletes and their partnerships."</p>
                </div>
            </section>
        </div>
    }
}
