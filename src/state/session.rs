//! Session state shared through Leptos context.
//!
//! DESIGN
//! ======
//! A single explicit object instead of ad-hoc localStorage reads: pages
//! read it to attach credentials, and only the login/logout flows write
//! it. Persistence is handled separately by `util::storage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Jwt;

/// The authenticated session, if any.
///
/// `expiration` is kept in memory for display/debugging but is never
/// persisted and never checked before a request; an expired token simply
/// surfaces as a failed call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expiration: Option<String>,
}

impl SessionState {
    /// Build a session from the JWT payload returned by the login endpoint.
    #[must_use]
    pub fn from_jwt(jwt: &Jwt) -> Self {
        Self {
            access_token: Some(jwt.access_token.clone()),
            refresh_token: Some(jwt.refresh_token.clone()),
            expiration: Some(jwt.expiration.clone()),
        }
    }

    /// The access token attached to authenticated requests.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Whether an access token is present (not whether it is still valid).
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Drop all credentials, returning to the signed-out state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
