//! Role dispatch for `/dashboard`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::session::{Session, SessionState};
use crate::util::auth::{LOGIN_PATH, dashboard_path};

/// Sends each signed-in user to their role's own dashboard; signed-out
/// visitors go to the sign-in view. Renders only a spinner itself.
#[component]
pub fn RoleDashboardPage() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    Effect::new(move || match session.current() {
        SessionState::Loading => {}
        SessionState::Unauthenticated => navigate(LOGIN_PATH, NavigateOptions::default()),
        SessionState::Authenticated(account) => {
            navigate(dashboard_path(account.role), NavigateOptions::default());
        }
    });

    view! { <LoadingSpinner/> }
}
