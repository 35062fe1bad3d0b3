//! Persistence for the bearer credential.
//!
//! TRADE-OFFS
//! ==========
//! Browser persistence is best-effort `localStorage`; SSR and native tests
//! see an always-empty store so server rendering stays deterministic.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::Mutex;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Somewhere a single bearer token survives between visits.
pub trait TokenStore: Send + Sync {
    /// Previously saved token, if any.
    fn load(&self) -> Option<String>;
    /// Replace the saved token.
    fn save(&self, token: &str);
    /// Forget the saved token.
    fn clear(&self);
}

/// Token store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    leptos::logging::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
