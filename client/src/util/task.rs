//! Fire-and-forget UI tasks.
//!
//! Page handlers start API calls through [`spawn_ui_task`] so the same code
//! type-checks in every feature set. Outside the browser the future is
//! dropped unpolled; the remote API is never called during SSR.

use std::future::Future;

/// Run `fut` on the browser's event loop.
#[cfg(feature = "hydrate")]
pub fn spawn_ui_task<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    leptos::task::spawn_local(fut);
}

/// Server/native build: drop `fut` without running it.
#[cfg(not(feature = "hydrate"))]
pub fn spawn_ui_task<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    drop(fut);
}
