//! Sign-in page with inline failure messages and a password-reset request.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::dashboard_path;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let show_reset = RwSignal::new(false);
    let reset_info = RwSignal::new(String::new());

    // Already signed in? Straight to the user's own dashboard.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if let Some(role) = session.current().role() {
                navigate(dashboard_path(role), NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            error.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&email_value, &password_value).await {
                    Ok(role) => {
                        navigate(dashboard_path(role), NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&email_value, &password_value, &navigate);
            busy.set(false);
        }
    };

    let on_reset_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked().trim().to_owned();
        if email_value.is_empty() {
            reset_info.set("Enter your account email above first.".to_owned());
            return;
        }
        reset_info.set("Sending reset link...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(()) => reset_info.set("Check your email for a reset link.".to_owned()),
                Err(err) => reset_info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"NILbx"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <button
                    class="login-link"
                    on:click=move |_| show_reset.update(|v| *v = !*v)
                >
                    "Forgot password?"
                </button>
                <Show when=move || show_reset.get()>
                    <form class="login-form" on:submit=on_reset_request>
                        <button class="login-button" type="submit">
                            "Email me a reset link"
                        </button>
                    </form>
                </Show>
                <Show when=move || !reset_info.get().is_empty()>
                    <p class="login-message">{move || reset_info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New to NILbx? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
