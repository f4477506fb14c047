//! Account registration with role selection.
//!
//! Registration never signs the new account in: on success the page shows
//! a confirmation and links to the sign-in view, where the user obtains a
//! credential explicitly.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::RegisterRequest;
use crate::net::types::Role;

/// Roles selectable at sign-up. School and agency accounts are
/// provisioned by support, not self-service.
const SELECTABLE_ROLES: [Role; 4] = [Role::Fan, Role::Athlete, Role::Sponsor, Role::Influencer];

/// Validate the sign-up form before it goes anywhere near the network.
fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Enter your full name.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.".to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Fan);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();
        if let Err(message) =
            validate_registration(&name_value, &email_value, &password_value, &confirm_value)
        {
            error.set(message);
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let request = RegisterRequest {
                name: name_value,
                email: email_value,
                password: password_value,
                role: role.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(()) => done.set(true),
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <Show
                    when=move || !done.get()
                    fallback=|| {
                        view! {
                            <h1>"Welcome to NILbx!"</h1>
                            <p class="register-card__subtitle">
                                "Your account is ready. " <a href="/auth">"Sign in"</a>
                                " to get started."
                            </p>
                        }
                    }
                >
                    <h1>"Create your account"</h1>
                    <form class="register-form" on:submit=on_submit>
                        <input
                            class="register-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="register-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label class="register-label">
                            "I am a..."
                            <select
                                class="register-input"
                                on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
                            >
                                {SELECTABLE_ROLES
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option
                                                value=option.as_str()
                                                selected=move || role.get() == option
                                            >
                                                {option.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <input
                            class="register-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="register-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="register-button" type="submit" disabled=move || busy.get()>
                            "Create Account"
                        </button>
                    </form>
                    <Show when=move || !error.get().is_empty()>
                        <p class="register-message register-message--error">
                            {move || error.get()}
                        </p>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
