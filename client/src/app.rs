//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::flash_banner::FlashBanner;
use crate::components::root_layout::RootLayout;
use crate::components::route_guard::{PrivateRoute, PublicRoute};
use crate::config::{API_BASE_META, ApiConfig};
use crate::net::http::ApiClient;
use crate::pages::{
    home::HomePage, login::LoginPage, manage_categories::ManageCategoriesPage, manage_content::ManageContentPage,
    manage_posts::ManagePostsPage, manage_tags::ManageTagsPage, posts::PostsPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::auth::Session;
use crate::state::flash::FlashState;
use crate::state::token_store::BrowserTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides an [`ApiConfig`] context; its address is written into a
/// meta tag for the browser to pick up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::resolve).base_url;

    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session, the API client, and the flash banner, and restores the
/// persisted token once mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::resolve);
    let session = Session::new(Arc::new(BrowserTokenStore));
    provide_context(session);
    provide_context(ApiClient::new(config.base_url));
    provide_context(RwSignal::new(FlashState::default()));

    // Effects only run in the browser, so SSR always renders the pending state.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpost.css"/>
        <Title text="Inkpost"/>

        <Router>
            <FlashBanner/>
            <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                <Route path=StaticSegment("login") view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }/>
                <Route path=StaticSegment("register") view=|| view! { <PublicRoute><RegisterPage/></PublicRoute> }/>
                <Route path=StaticSegment("") view=|| private(HomePage)/>
                <Route path=StaticSegment("posts") view=|| private(PostsPage)/>
                <Route path=StaticSegment("profile") view=|| private(ProfilePage)/>
                <Route path=StaticSegment("manage-content") view=|| private(ManageContentPage)/>
                <Route
                    path=(StaticSegment("manage-content"), StaticSegment("tags"))
                    view=|| private(ManageTagsPage)
                />
                <Route
                    path=(StaticSegment("manage-content"), StaticSegment("categories"))
                    view=|| private(ManageCategoriesPage)
                />
                <Route
                    path=(StaticSegment("manage-content"), StaticSegment("posts"))
                    view=|| private(ManagePostsPage)
                />
            </Routes>
        </Router>
    }
}

/// Wrap `page` in the private guard and the signed-in layout.
fn private<F, V>(page: F) -> impl IntoView
where
    F: Fn() -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <PrivateRoute>
            <RootLayout>{page()}</RootLayout>
        </PrivateRoute>
    }
}
