//! Route wrappers that admit or redirect based on the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in the app is wrapped in exactly one of these. Both re-run on
//! session changes, so signing out re-gates the page being viewed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Session;
use crate::util::guard::{Gate, GuardDecision, decide, install_gate_redirect};
use crate::util::messages::{LOADING, REDIRECTING};

/// Render `children` only for signed-in users; others go to `/login`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    gated(Gate::Private, children)
}

/// Render `children` only for anonymous visitors; signed-in users go to `/`.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    gated(Gate::Public, children)
}

fn gated(gate: Gate, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    install_gate_redirect(gate, session, use_navigate());

    let decision = move || decide(gate, &session.snapshot());

    view! {
        <Show
            when=move || decision() == GuardDecision::Render
            fallback=move || view! { <p class="route-guard">{move || placeholder(decision())}</p> }
        >
            {children()}
        </Show>
    }
}

fn placeholder(decision: GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Pending => LOADING,
        GuardDecision::Redirect(_) => REDIRECTING,
        GuardDecision::Render => "",
    }
}
