//! Role-scoped realtime notification channel.
//!
//! The backend exposes one websocket per role (`/api/user/ws`,
//! `/api/admin/ws`, `/api/superadmin/ws`) and pushes plain
//! `{"message": "..."}` frames through it. [`connect`] picks the endpoint
//! for a role, carries the bearer token on the upgrade request, and hands
//! back a [`Channel`]. There is no reconnect and no heartbeat; when the
//! connection drops, the stream ends and the caller decides what to do.

use algocdk_shared::{ApiError, Notification, Role};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::credentials::CredentialProvider;

/// Websocket URL for a role, derived from the HTTP base URL.
pub fn channel_url(base_url: &str, role: Role) -> String {
    let base = base_url.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if base.starts_with("ws://") || base.starts_with("wss://") {
        base.to_string()
    } else {
        format!("ws://{base}")
    };
    format!("{ws_base}{}", role.channel_path())
}

/// Open the notification channel for a role.
///
/// The token from `credentials` rides the upgrade request the same way
/// HTTP requests carry it; without one the connection is attempted
/// unauthenticated.
pub async fn connect(
    base_url: &str,
    role: Role,
    credentials: Option<&dyn CredentialProvider>,
) -> Result<Channel, ApiError> {
    let url = channel_url(base_url, role);
    let mut request = url
        .as_str()
        .into_client_request()
        .map_err(|e| ApiError::Channel(e.to_string()))?;

    if let Some(token) = credentials.and_then(|c| c.token()) {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::Channel(e.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, value);
    }

    let (stream, _response) = connect_async(request)
        .await
        .map_err(|e| ApiError::Channel(e.to_string()))?;
    tracing::info!(%url, "realtime channel connected");

    Ok(Channel { stream })
}

/// A live connection to one role's notification endpoint.
pub struct Channel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Channel {
    /// Next notification, or `None` once the server closes the connection.
    ///
    /// Control frames are handled by the transport and skipped here;
    /// a text frame that doesn't decode surfaces as
    /// [`ApiError::MalformedResponse`].
    pub async fn next(&mut self) -> Option<Result<Notification, ApiError>> {
        while let Some(msg) = self.stream.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    tracing::debug!(%text, "notification frame");
                    return Some(
                        serde_json::from_str(&text)
                            .map_err(|e| ApiError::MalformedResponse(e.to_string())),
                    );
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("realtime channel closed by server");
                    return None;
                }
                // Pings are answered by tungstenite; binary frames are not
                // part of the protocol.
                Ok(_) => continue,
                Err(e) => return Some(Err(ApiError::Channel(e.to_string()))),
            }
        }
        None
    }

    /// Send a raw text frame to the server.
    pub async fn send_text(&mut self, text: &str) -> Result<(), ApiError> {
        self.stream
            .send(Message::Text(text.to_string().into()))
            .await
            .map_err(|e| ApiError::Channel(e.to_string()))
    }

    /// Close the connection cleanly.
    pub async fn close(mut self) -> Result<(), ApiError> {
        self.stream
            .close(None)
            .await
            .map_err(|e| ApiError::Channel(e.to_string()))
    }
}
