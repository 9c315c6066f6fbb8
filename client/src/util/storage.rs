//! Token persistence in browser storage.
//!
//! The bearer token lives in `localStorage` under
//! [`portal::session::TOKEN_STORAGE_KEY`]. Server rendering has no storage,
//! so every function here is a no-op (or `None`) outside the browser.

#[cfg(feature = "hydrate")]
use portal::session::TOKEN_STORAGE_KEY;

/// Stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the token and wipe `sessionStorage`.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.clear();
            }
        }
    }
}
