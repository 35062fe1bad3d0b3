//! Top navigation for signed-in pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Session;
use crate::util::guard::LOGIN_ROUTE;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        session.logout();
        leptos::logging::log!("signed out");
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Inkpost"</A>
            <div class="navbar__links">
                <A href="/" attr:class="navbar__link">"Home"</A>
                <A href="/posts" attr:class="navbar__link">"Posts"</A>
                <A href="/profile" attr:class="navbar__link">"Your Profile"</A>
                <A href="/manage-content" attr:class="navbar__link">"Manage Content"</A>
            </div>
            <button class="btn navbar__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </nav>
    }
}
