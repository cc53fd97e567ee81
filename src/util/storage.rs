//! Session persistence in browser localStorage.
//!
//! Exactly two values survive a reload: the access and refresh tokens,
//! under the key names the backend ecosystem already uses. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
const ACCESS_TOKEN_KEY: &str = "accessToken";
#[cfg(feature = "hydrate")]
const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Read the persisted token pair into a fresh session.
///
/// The expiration is not persisted, so a reloaded session carries `None`
/// there until the next login.
#[must_use]
pub fn load_session() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return SessionState::default();
        };
        SessionState {
            access_token: storage.get_item(ACCESS_TOKEN_KEY).ok().flatten(),
            refresh_token: storage.get_item(REFRESH_TOKEN_KEY).ok().flatten(),
            expiration: None,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionState::default()
    }
}

/// Persist the session's token pair.
pub fn save_session(session: &SessionState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Some(token) = &session.access_token {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
            }
            if let Some(token) = &session.refresh_token {
                let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove both persisted tokens (logout).
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
