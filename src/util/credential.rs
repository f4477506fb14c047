//! Durable storage for the raw credential string.
//!
//! SYSTEM CONTEXT
//! ==============
//! One localStorage key holds the credential and nothing else; identity is
//! always re-derived from it. Storage failures (quota, disabled storage,
//! no browser) degrade silently — the session keeps working in memory for
//! the rest of the page lifetime.

use crate::util::config::TOKEN_STORAGE_KEY;

/// Persist `token`, overwriting any previous value.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// The stored credential, or `None` if absent or unreadable.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored credential entirely. Safe when nothing is stored.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
