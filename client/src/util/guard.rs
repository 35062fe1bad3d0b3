//! Route gating decisions shared by the guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private and public routes apply mirror-image rules over the same session
//! state; keeping the decision pure lets both guards (and tests) share it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, Session};

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/";

/// Which side of the session boundary a route lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Requires a session; anonymous visitors go to `/login`.
    Private,
    /// Only for anonymous visitors; signed-in users go to `/`.
    Public,
}

/// Outcome of evaluating a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session storage not consulted yet.
    Pending,
    Render,
    Redirect(&'static str),
}

/// Evaluate `gate` against the current auth state.
#[must_use]
pub fn decide(gate: Gate, auth: &AuthState) -> GuardDecision {
    if !auth.initialized {
        return GuardDecision::Pending;
    }
    match (gate, auth.is_authenticated()) {
        (Gate::Private, false) => GuardDecision::Redirect(LOGIN_ROUTE),
        (Gate::Public, true) => GuardDecision::Redirect(DASHBOARD_ROUTE),
        _ => GuardDecision::Render,
    }
}

/// Navigate away whenever `gate` stops admitting the current session.
///
/// Re-evaluates on every session change, so signing out on a private page
/// immediately sends the user to `/login`.
pub fn install_gate_redirect<F>(gate: Gate, session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decide(gate, &session.snapshot()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
