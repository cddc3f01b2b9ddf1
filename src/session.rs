//! Session credential access and the superuser check.
//!
//! The bearer token lives in `localStorage` under a single fixed key. All
//! reads go through the [`TokenStore`] capability so the gate and the oracle
//! share one accessor and tests can substitute an in-memory fake. This code
//! treats the stored token as read-only; only the login/logout flows write.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::IdentityApi;

/// The `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Read access to the stored credential. Presence is meaningful on its own:
/// `None` means unauthenticated.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
}

/// [`TokenStore`] backed by the browser's `localStorage`.
///
/// Off-browser (SSR, native tests) there is no storage, so no token.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Persist the bearer token after a successful login.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the bearer token on logout.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Ask the backend whether the current session belongs to a superuser.
///
/// Total over all inputs, always producing a boolean:
/// - no stored token resolves to `false` without touching the network;
/// - any transport, status, or decode failure is logged once and resolves
///   to `false`.
pub async fn check_admin_status(tokens: &impl TokenStore, api: &impl IdentityApi) -> bool {
    let Some(token) = tokens.token() else {
        return false;
    };
    match api.fetch_me(&token).await {
        Ok(identity) => identity.is_superuser,
        Err(err) => {
            log::error!("error checking admin status: {err}");
            false
        }
    }
}
