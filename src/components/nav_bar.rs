//! Top navigation: brand, marketplace link, session controls, theme toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::LOGIN_PATH;
use crate::util::dark_mode;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = Session::expect();
    let dark = RwSignal::new(dark_mode::read_preference());

    // Reapply the saved theme once the page is interactive.
    Effect::new(move || dark_mode::apply(dark.get_untracked()));

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(dark.get_untracked());
        dark.set(next);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"NILbx"</a>
            <div class="navbar__links">
                <a href="/marketplace">"Marketplace"</a>
            </div>
            <Show
                when=move || session.current().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="navbar__session">
                            <a class="btn" href="/auth">"Sign in"</a>
                            <a class="btn btn--primary" href="/register">"Join NILbx"</a>
                        </div>
                    }
                }
            >
                <SessionControls/>
            </Show>
            <button class="navbar__theme" on:click=on_toggle_theme>
                {move || if dark.get() { "Light" } else { "Dark" }}
            </button>
        </nav>
    }
}

/// Identity display plus the extend/sign-out controls.
#[component]
fn SessionControls() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();
    let extending = RwSignal::new(false);

    let display_name = move || {
        let state = session.current();
        state.user().map(|u| u.display_name().to_owned()).unwrap_or_default()
    };
    let role_label = move || {
        session.current().role().map(|r| r.label()).unwrap_or_default()
    };

    let on_extend = move |_| {
        if extending.get_untracked() {
            return;
        }
        extending.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = session.refresh().await {
                leptos::logging::warn!("session refresh failed: {err}");
            }
            extending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        extending.set(false);
    };

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="navbar__session">
            <span class="navbar__user">{display_name}</span>
            <span class="navbar__role">{role_label}</span>
            <button class="btn" on:click=on_extend disabled=move || extending.get()>
                "Extend session"
            </button>
            <button class="btn" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
