//! Banner for the current [`FlashState`] message.

use leptos::prelude::*;

use crate::state::flash::FlashState;

#[component]
pub fn FlashBanner() -> impl IntoView {
    let flash = expect_context::<RwSignal<FlashState>>();

    move || {
        flash.get().current.map(|current| {
            view! {
                <div class=current.kind.class() role="status">
                    <span class="flash__text">{current.text}</span>
                    <button
                        class="flash__dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| flash.update(FlashState::dismiss)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
