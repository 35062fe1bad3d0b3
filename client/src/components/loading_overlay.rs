//! Full-screen overlay shown while an auth request is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || active.get()>
            <div class="loading-overlay" aria-busy="true">
                <span class="loading-overlay__spinner"></span>
                <span class="loading-overlay__label">"Loading..."</span>
            </div>
        </Show>
    }
}
