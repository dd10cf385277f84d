use thiserror::Error;

/// Failures talking to the backend's REST endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend responded with HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("could not open progress stream: {0}")]
    Open(String),

    #[error("malformed progress message: {0}")]
    Malformed(String),

    #[error("progress stream closed")]
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,

    #[error("clipboard read rejected: {0}")]
    Denied(String),
}
