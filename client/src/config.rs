//! API base address discovery.
//!
//! The host renders the configured address into the HTML shell as
//! `<meta name="inkpost-api-base">`; the browser reads it back at startup.
//! Builds without the tag (static hosting, native tests) use the address
//! baked in at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the shell meta tag carrying the API base address.
pub const API_BASE_META: &str = "inkpost-api-base";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const COMPILED_API_BASE_URL: &str = match option_env!("INKPOST_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// Where the remote CMS API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Normalize `base_url`, falling back to the compiled default when blank.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::compiled();
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Address baked in at build time.
    #[must_use]
    pub fn compiled() -> Self {
        Self { base_url: COMPILED_API_BASE_URL.trim_end_matches('/').to_owned() }
    }

    /// Browser: the shell meta tag, else the compiled address.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn resolve() -> Self {
        let from_meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        match from_meta {
            Some(url) => Self::new(&url),
            None => {
                leptos::logging::warn!("{API_BASE_META} meta tag missing; using compiled API address");
                Self::compiled()
            }
        }
    }

    /// Server/native: the compiled address.
    #[cfg(not(feature = "hydrate"))]
    #[must_use]
    pub fn resolve() -> Self {
        Self::compiled()
    }
}
