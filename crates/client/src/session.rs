//! Login, logout and session persistence.
//!
//! The session layer owns writes to the credential store: a successful
//! login persists the returned token, logout removes it. Requests never
//! touch the store directly; they go through
//! [`StoredCredentials`](crate::credentials::StoredCredentials), which
//! re-reads the persisted session on every call.

use std::sync::Arc;

use algocdk_shared::{ApiError, RegisterRequest, Role, UserSummary};
use serde::{Deserialize, Serialize};

use crate::api_client::ApiClient;
use crate::credentials::StoredCredentials;
use crate::storage;
use crate::ws::{self, Channel};

pub(crate) const SESSION_KEY: &str = "algocdk_session";

/// The persisted session: the bearer token plus what the login response
/// said about the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub role: Role,
    pub user: Option<UserSummary>,
}

/// Entry point tying together base-URL selection, the credential store and
/// client construction.
#[derive(Debug, Clone)]
pub struct Session {
    domain: String,
}

impl Session {
    /// Create a session for a backend domain or full origin.
    ///
    /// `"localhost:8080"` and private-range hosts get `http://`, anything
    /// else `https://`; a value with an explicit scheme is used as-is.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    /// The origin prefixed to every API path.
    pub fn api_base_url(&self) -> String {
        let domain = self.domain.trim();
        if domain.is_empty() {
            return String::new();
        }

        if domain.contains("://") {
            return domain.trim_end_matches('/').to_string();
        }

        let host_part = domain.split(':').next().unwrap_or(domain);
        let is_local = host_part == "localhost"
            || host_part == "127.0.0.1"
            || host_part == "0.0.0.0"
            || host_part.starts_with("192.168.")
            || host_part.starts_with("10.");

        if is_local {
            format!("http://{}", domain.trim_end_matches('/'))
        } else {
            format!("https://{}", domain.trim_end_matches('/'))
        }
    }

    /// An API client bound to this session's backend and credential store.
    pub fn client(&self) -> ApiClient {
        ApiClient::new()
            .with_base_url(self.api_base_url())
            .with_credentials(Arc::new(StoredCredentials))
    }

    /// The currently persisted session, if any.
    pub fn current(&self) -> Option<AuthSession> {
        storage::load(SESSION_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        storage::exists(SESSION_KEY)
    }

    /// Log in and persist the returned token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let resp = self.client().login(email, password).await?;
        let session = AuthSession {
            token: resp.token,
            role: resp.role.as_deref().map(Role::parse).unwrap_or(Role::User),
            user: resp.user,
        };
        self.store(&session);
        Ok(session)
    }

    /// Log in against the superadmin endpoint.
    pub async fn superadmin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let credentials = algocdk_shared::LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.client().superadmin_login(&credentials).await?;
        let session = AuthSession {
            token: resp.token,
            role: resp
                .role
                .as_deref()
                .map(Role::parse)
                .unwrap_or(Role::SuperAdmin),
            user: resp.user,
        };
        self.store(&session);
        Ok(session)
    }

    /// Register a new account; the backend logs it in immediately.
    pub async fn register(&self, user: &RegisterRequest) -> Result<AuthSession, ApiError> {
        let resp = self.client().register(user).await?;
        let session = AuthSession {
            token: resp.token,
            role: resp.role.as_deref().map(Role::parse).unwrap_or(Role::User),
            user: resp.user,
        };
        self.store(&session);
        Ok(session)
    }

    /// Drop the persisted session. Requests issued afterwards go out
    /// unauthenticated.
    pub fn logout(&self) {
        storage::remove(SESSION_KEY);
        tracing::info!("session cleared");
    }

    /// Open the realtime notification channel for a role, authenticated
    /// with the stored token.
    pub async fn connect(&self, role: Role) -> Result<Channel, ApiError> {
        ws::connect(&self.api_base_url(), role, Some(&StoredCredentials)).await
    }

    fn store(&self, session: &AuthSession) {
        if !storage::save(SESSION_KEY, session) {
            tracing::warn!("failed to persist session; requests will be unauthenticated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_domains_get_http() {
        assert_eq!(
            Session::new("localhost:8080").api_base_url(),
            "http://localhost:8080"
        );
        assert_eq!(
            Session::new("192.168.1.5:3000").api_base_url(),
            "http://192.168.1.5:3000"
        );
    }

    #[test]
    fn public_domains_get_https() {
        assert_eq!(
            Session::new("api.algocdk.com").api_base_url(),
            "https://api.algocdk.com"
        );
    }

    #[test]
    fn explicit_schemes_pass_through() {
        assert_eq!(
            Session::new("http://staging.algocdk.com/").api_base_url(),
            "http://staging.algocdk.com"
        );
    }

    #[test]
    fn empty_domain_means_relative_paths() {
        assert_eq!(Session::new("").api_base_url(), "");
    }
}
