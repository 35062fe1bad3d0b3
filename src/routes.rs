//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves three things: a health check, the compiled client assets
//! under `/pkg`, and server-rendered Leptos pages for every app route. Each
//! render gets the configured [`ApiConfig`] as context so the shell can
//! advertise it to the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// Full application router.
///
/// # Errors
///
/// Returns [`StartupError::Leptos`] when the Leptos configuration cannot be
/// loaded.
pub fn app(config: &ServerConfig) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    Ok(router(conf.leptos_options, config.api_config()))
}

/// Router for already-loaded Leptos options.
pub fn router(leptos_options: LeptosOptions, api: ApiConfig) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
