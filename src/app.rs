//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::athlete::AthleteDashboardPage;
use crate::pages::dashboard::RoleDashboardPage;
use crate::pages::fan::FanDashboardPage;
use crate::pages::influencer::InfluencerDashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::marketplace::MarketplacePage;
use crate::pages::register::RegisterPage;
use crate::pages::sponsor::SponsorDashboardPage;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session context and wires the browser-level session signals:
/// the startup credential check, cross-tab storage events, and the
/// activity signal that keeps an active session alive.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::provide();

    #[cfg(feature = "hydrate")]
    {
        // Resolve the stored credential exactly once at startup.
        Effect::new(move || {
            leptos::task::spawn_local(session.initialize());
        });

        // A sign-in/sign-out in another tab of this origin shows up as a
        // storage event on the credential key.
        window_event_listener(leptos::ev::storage, move |ev| {
            session.sync_external_credential(ev.key().as_deref(), ev.new_value().as_deref());
        });

        // User activity keeps an active session from idling out.
        window_event_listener(leptos::ev::pointerdown, move |_| session.extend());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/nilbx.css"/>
        <Title text="NILbx"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("auth") view=LoginPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("marketplace") view=MarketplacePage/>
                    <Route path=StaticSegment("dashboard") view=RoleDashboardPage/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("athlete"))
                        view=AthleteDashboardPage
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("sponsor"))
                        view=SponsorDashboardPage
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("fan"))
                        view=FanDashboardPage
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("influencer"))
                        view=InfluencerDashboardPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
