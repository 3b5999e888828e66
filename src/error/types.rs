//! Main error type for the site-generation client.

use thiserror::Error;

use crate::transport::TransportError;
use super::categories::*;

/// Result type alias for client operations.
pub type SitegenResult<T> = Result<T, SitegenError>;

/// Top-level error type for the site-generation client.
///
/// Every failure is terminal for the session that produced it; the client
/// never retries internally. Retry policy, if any, belongs to the caller.
#[derive(Error, Debug, Clone)]
pub enum SitegenError {
    /// Client-side configuration problem.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Request rejected before it was sent.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Network or connection failure below the HTTP layer.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a non-success status. The message is the
    /// structured error text from the response body when one was present.
    #[error("{message}")]
    Upstream {
        /// HTTP status code of the failing response.
        status: u16,
        /// Error message surfaced from the response body.
        message: String,
    },

    /// The service answered with a success status but no usable body.
    #[error("Empty response body")]
    EmptyResponse,

    /// The response stream carried bytes that could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A structured payload failed to parse.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Session lifecycle violation.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl SitegenError {
    /// Returns the single-line message for this error.
    ///
    /// Callers can render this directly without branching on the error kind;
    /// the kind itself stays available for diagnostics.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the upstream HTTP status, if this error came from one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            SitegenError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SitegenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SitegenError::Transport(TransportError::Timeout)
        } else {
            SitegenError::Transport(TransportError::Connection(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for SitegenError {
    fn from(err: serde_json::Error) -> Self {
        SitegenError::Response(ResponseError::Deserialization {
            message: err.to_string(),
        })
    }
}

impl From<url::ParseError> for SitegenError {
    fn from(err: url::ParseError) -> Self {
        SitegenError::Configuration(ConfigurationError::InvalidBaseUrl {
            url: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_is_verbatim() {
        let error = SitegenError::Upstream {
            status: 404,
            message: "rate limited".to_string(),
        };
        assert_eq!(error.message(), "rate limited");
        assert_eq!(error.upstream_status(), Some(404));
    }

    #[test]
    fn test_non_upstream_has_no_status() {
        let error = SitegenError::EmptyResponse;
        assert_eq!(error.upstream_status(), None);
        assert_eq!(error.message(), "Empty response body");
    }

    #[test]
    fn test_decode_error_conversion() {
        let error: SitegenError = DecodeError::InvalidSequence { position: 7 }.into();
        assert!(matches!(
            error,
            SitegenError::Decode(DecodeError::InvalidSequence { position: 7 })
        ));
    }

    #[test]
    fn test_session_error_conversion() {
        let error: SitegenError = SessionError::AlreadyInFlight.into();
        assert!(matches!(error, SitegenError::Session(SessionError::AlreadyInFlight)));
    }
}
