//! Neutral waiting indicator shown while the session or data resolves.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-label="Loading">
            <div class="loading-spinner__ring"></div>
        </div>
    }
}
