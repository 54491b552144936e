use thiserror::Error;

/// Classification of a failed backend call.
///
/// The client never interprets response bodies beyond extracting the `data`
/// envelope field, so these three kinds are the whole error surface.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, refused connection, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned status {code}")]
    Status { code: u16 },

    /// Success status, but the body could not be decoded.
    #[error("unexpected response payload: {0}")]
    Payload(String),
}
