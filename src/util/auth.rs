//! Bearer-token helper over durable browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and the route guard share one notion of "a token is
//! present"; API calls share one way of attaching it. Client-side
//! validity is just presence; a bad token surfaces as a profile-fetch
//! failure, which downgrades the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Durable-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "retyrment_token";

/// Format a token as an `Authorization` header value.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Read the stored token, if any. `None` outside the browser.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether a non-empty token is stored.
pub fn is_logged_in() -> bool {
    token().is_some()
}

/// Store a bearer token.
pub fn set_token(token: &str) {
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

/// Remove the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
