//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and every data page: guards read whether a session
//! exists, pages read the bearer token to attach to API calls. Only the login
//! page and the navbar's sign-out write it.
//!
//! DESIGN
//! ======
//! [`Session`] is constructed once by the root component, handed out through
//! Leptos context, and owns its [`TokenStore`]. It starts uninitialized and is
//! restored from storage once the browser has mounted, so SSR output never
//! depends on browser storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::token_store::TokenStore;

/// Errors returned by [`AuthState::login`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The server handed back an empty or whitespace-containing token.
    #[error("received an unusable session token")]
    InvalidToken,
}

/// Whether `token` could plausibly be a bearer credential.
#[must_use]
pub fn looks_valid(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Plain authentication state: the current token and whether storage has
/// been consulted yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub initialized: bool,
}

impl AuthState {
    /// Load any persisted token. Unusable leftovers are wiped from `store`.
    pub fn restore(&mut self, store: &dyn TokenStore) {
        self.token = match store.load() {
            Some(token) if looks_valid(&token) => Some(token),
            Some(_) => {
                store.clear();
                None
            }
            None => None,
        };
        self.initialized = true;
    }

    /// Persist `token` and mark the session authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidToken`] without touching `store` when
    /// the token is not usable.
    pub fn login(&mut self, store: &dyn TokenStore, token: &str) -> Result<(), SessionError> {
        let token = token.trim();
        if !looks_valid(token) {
            return Err(SessionError::InvalidToken);
        }
        store.save(token);
        self.token = Some(token.to_owned());
        self.initialized = true;
        Ok(())
    }

    /// Drop the token from memory and storage.
    pub fn logout(&mut self, store: &dyn TokenStore) {
        store.clear();
        self.token = None;
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(looks_valid)
    }
}

/// Reactive session handle shared through context.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl Session {
    /// Create an uninitialized session over `store`.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), store: StoredValue::new(store) }
    }

    /// Read the persisted token. Called once after the app mounts.
    pub fn restore(&self) {
        let store = self.store.get_value();
        self.state.update(|s| s.restore(store.as_ref()));
        leptos::logging::log!("session restored (authenticated: {})", self.state.with_untracked(AuthState::is_authenticated));
    }

    /// Store a freshly issued token.
    ///
    /// # Errors
    ///
    /// See [`AuthState::login`].
    pub fn login(&self, token: &str) -> Result<(), SessionError> {
        let store = self.store.get_value();
        let mut result = Ok(());
        self.state.update(|s| result = s.login(store.as_ref(), token));
        result
    }

    /// Clear the session everywhere.
    pub fn logout(&self) {
        let store = self.store.get_value();
        self.state.update(|s| s.logout(store.as_ref()));
    }

    /// Current token without subscribing to changes.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Reactive snapshot of the full auth state.
    pub fn snapshot(&self) -> AuthState {
        self.state.get()
    }
}
