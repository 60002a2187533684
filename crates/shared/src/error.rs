//! Error taxonomy shared by the HTTP gateway and the realtime channel.

use thiserror::Error;

/// Failure modes a caller can observe from any API operation.
///
/// The gateway performs no retries and no local recovery; every variant
/// propagates directly to the caller. A non-2xx status maps to
/// [`ApiError::RequestFailed`] carrying the numeric code and nothing else,
/// so a 401 and a 503 look the same apart from the status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// A success response carried a body that is not the expected JSON.
    #[error("invalid JSON payload: {0}")]
    MalformedResponse(String),

    /// The transport reported a failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Opening or using the realtime channel failed.
    #[error("channel error: {0}")]
    Channel(String),
}

impl ApiError {
    /// Status code of a failed request, if this is [`ApiError::RequestFailed`].
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}
