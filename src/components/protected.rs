//! Route wrapper gating protected views on the session.
//!
//! While the session is still resolving this renders a neutral spinner and
//! makes no navigation decision, which avoids a redirect flicker during
//! the startup revalidation. Signed-out visitors go to the sign-in view;
//! signed-in users on the wrong view are steered to their own dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::auth::{LOGIN_PATH, RouteDecision, decide_route};

/// Render `children` only for a session that satisfies `required_role`.
#[component]
pub fn Protected(
    /// Role this view is declared for; omit to admit any signed-in user.
    #[prop(optional, into)]
    required_role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    Effect::new(move || match decide_route(&session.current(), required_role) {
        RouteDecision::RedirectToLogin => navigate(LOGIN_PATH, NavigateOptions::default()),
        RouteDecision::RedirectTo(path) => navigate(path, NavigateOptions::default()),
        RouteDecision::Wait | RouteDecision::Render => {}
    });

    view! {
        {move || match decide_route(&session.current(), required_role) {
            RouteDecision::Render => children().into_any(),
            _ => view! { <LoadingSpinner/> }.into_any(),
        }}
    }
}
