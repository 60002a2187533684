//! Credential lookup for outgoing requests.
//!
//! The gateway never owns a token. It asks a [`CredentialProvider`] on every
//! request, so whatever logged in (or out) since the client was built is
//! reflected immediately. Writing credentials is the session layer's job;
//! providers only read.

use crate::session::{AuthSession, SESSION_KEY};
use crate::storage;

/// Read-only source of the current bearer token.
pub trait CredentialProvider: Send + Sync {
    /// The token to attach, if any. Called once per request; `None` means
    /// the request goes out unauthenticated and the server decides.
    fn token(&self) -> Option<String>;
}

/// A fixed token, for servers-to-server use and tests.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// Reads the persisted session from client-local storage on every call.
#[derive(Debug, Clone, Default)]
pub struct StoredCredentials;

impl CredentialProvider for StoredCredentials {
    fn token(&self) -> Option<String> {
        storage::load::<AuthSession>(SESSION_KEY).map(|s| s.token)
    }
}
