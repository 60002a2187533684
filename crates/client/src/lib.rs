//! AlgoCDK client
//!
//! Native client library for the AlgoCDK bot-marketplace backend: a shared
//! request gateway with bearer authentication, one wrapper per backend
//! endpoint, a persistent session store, and the role-scoped realtime
//! notification channel.

pub mod api_client;
pub mod credentials;
pub mod endpoints;
pub mod logging;
pub mod session;
pub mod storage;
pub mod ws;

pub use api_client::{ApiClient, RequestBody};
pub use credentials::{CredentialProvider, StaticCredentials, StoredCredentials};
pub use session::{AuthSession, Session};
pub use ws::Channel;
