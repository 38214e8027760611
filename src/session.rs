//! Session Store
//!
//! Holds the bearer token and its decoded claims, persisted as a single
//! string under a fixed local-storage key. Provided via context at the app
//! root and consumed through `use_session()`; no ambient global. Both fields
//! are set together or not at all: a token that fails to decode is discarded
//! and the session treated as absent.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::jwt::{self, Claims};

/// Local-storage key holding the raw token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Raw bearer token, attached to every authenticated request
    pub token: Option<String>,
    /// Claims decoded from the token, for display and the user-scoped queries
    pub user: Option<Claims>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// ========================
// Session Operations
// ========================

/// Rebuild the session from the persisted token at startup.
///
/// Runs synchronously so the route guard sees the restored session on the
/// first render. A stored token that no longer decodes is removed and the
/// empty session returned.
pub fn restore() -> SessionState {
    let stored = storage().and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten());
    let Some(token) = stored else {
        return SessionState::default();
    };
    match jwt::decode_claims(&token) {
        Ok(claims) => SessionState {
            token: Some(token),
            user: Some(claims),
        },
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[SESSION] discarding stored token: {}", err).into(),
            );
            if let Some(s) = storage() {
                let _ = s.remove_item(TOKEN_STORAGE_KEY);
            }
            SessionState::default()
        }
    }
}

/// Adopt a token handed in from outside (the OAuth2 redirect): decode,
/// persist, publish to the store.
pub fn login_with_token(store: SessionStore, token: String) -> Result<(), String> {
    let claims = jwt::decode_claims(&token)?;
    if let Some(s) = storage() {
        let _ = s.set_item(TOKEN_STORAGE_KEY, &token);
    }
    store.user().set(Some(claims));
    store.token().set(Some(token));
    Ok(())
}

/// Exchange credentials for a token and adopt it
pub async fn login(store: SessionStore, email: &str, password: &str) -> Result<(), String> {
    let token = api::login(email, password).await?;
    login_with_token(store, token)
}

/// Drop the session locally. The server is not notified.
pub fn logout(store: SessionStore) {
    if let Some(s) = storage() {
        let _ = s.remove_item(TOKEN_STORAGE_KEY);
    }
    store.token().set(None);
    store.user().set(None);
}
