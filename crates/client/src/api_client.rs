//! HTTP request gateway for the AlgoCDK backend.
//!
//! Every endpoint wrapper in [`crate::endpoints`] funnels through
//! [`ApiClient::request`]: attach the bearer token if one is available,
//! encode the body, issue the request, and map the response onto the shared
//! error taxonomy. No retries, no caching, no recovery.

use std::sync::Arc;

use algocdk_shared::ApiError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::CredentialProvider;

/// Payload attached to a single request.
///
/// The variant decides serialization: `Json` is serialized with serde and
/// tagged `Content-Type: application/json`; `Raw` goes out byte-for-byte
/// with no content-type override, leaving the transport to infer one.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Raw(Vec<u8>),
}

impl RequestBody {
    /// Encode any serializable value as a JSON body.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

/// HTTP client for the AlgoCDK API.
///
/// Cheap to clone; concurrent calls share nothing but the underlying
/// connection pool and the read-only credential lookup.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl ApiClient {
    /// Create a client with no base URL and no credentials.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            credentials: None,
        }
    }

    /// Set the origin prefixed to every server-relative path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Inject the credential provider consulted on each request.
    pub fn with_credentials(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(provider);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    fn bearer_token(&self) -> Option<String> {
        self.credentials.as_ref().and_then(|c| c.token())
    }

    /// Issue one request and decode the JSON response.
    ///
    /// A missing token is not an error; the request simply goes out without
    /// an `Authorization` header and the server rejects it if it cares. A
    /// non-2xx status maps to [`ApiError::RequestFailed`] without reading
    /// the body. An empty success body decodes as JSON `null`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut rb = self.client.request(method, &url);

        if let Some(token) = self.bearer_token() {
            rb = rb.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        match body {
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(&value)
                    .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
                rb = rb.header(CONTENT_TYPE, "application/json").body(bytes);
            }
            Some(RequestBody::Raw(bytes)) => {
                rb = rb.body(bytes);
            }
            None => {}
        }

        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        let body = if text.is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// POST a JSON body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(RequestBody::json(body)?))
            .await
    }

    /// POST with no body (toggle/promote style endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, None).await
    }

    /// POST a raw payload untouched, e.g. multipart form data.
    pub async fn post_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(RequestBody::Raw(body)))
            .await
    }

    /// PUT a JSON body.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(RequestBody::json(body)?))
            .await
    }

    /// PATCH with no body.
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, None).await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    /// DELETE with a JSON body (the backend's delete-user takes the id
    /// in the body).
    pub async fn delete_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, Some(RequestBody::json(body)?))
            .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
