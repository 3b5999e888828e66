//! Transport layer error types.

/// Transport error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The transport's configured timeout elapsed.
    #[error("Timeout")]
    Timeout,
    /// The request failed after the connection was established.
    #[error("Request error: {0}")]
    Request(String),
    /// The response byte stream failed mid-read.
    #[error("Stream error: {0}")]
    Stream(String),
}
