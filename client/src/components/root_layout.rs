//! Frame shared by all signed-in pages.

use leptos::prelude::*;

use super::navbar::Navbar;

#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
