//! Error category types for granular error handling.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    /// No base URL was provided.
    #[error("Missing base URL")]
    MissingBaseUrl,

    /// The base URL could not be parsed.
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl {
        /// The offending URL text.
        url: String,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the value.
        message: String,
    },
}

/// Request validation errors.
#[derive(Error, Debug, Clone)]
pub enum RequestError {
    /// The request failed validation before it was sent.
    #[error("Validation error: {message}")]
    Validation {
        /// What the request was missing.
        message: String,
    },
}

/// Byte-stream decoding errors.
///
/// Produced by the stateful UTF-8 decoder when the response stream carries
/// bytes that cannot be decoded. Both variants are unrecoverable for the
/// session that hit them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream contained a byte sequence that is not valid UTF-8.
    #[error("Invalid UTF-8 sequence at byte {position}")]
    InvalidSequence {
        /// Offset of the first invalid byte within the offending chunk.
        position: usize,
    },

    /// The stream ended in the middle of a multi-byte character.
    #[error("Stream ended inside a multi-byte sequence ({pending} bytes pending)")]
    TruncatedSequence {
        /// Number of bytes still waiting for the rest of the character.
        pending: usize,
    },
}

/// Response parsing errors.
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    /// The response body did not deserialize into the expected shape.
    #[error("Failed to deserialize response: {message}")]
    Deserialization {
        /// Underlying serde error text.
        message: String,
    },

    /// The response had an unexpected structure.
    #[error("Unexpected response format: {message}")]
    UnexpectedFormat {
        /// What was unexpected about it.
        message: String,
    },
}

/// Session lifecycle errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A generation was requested while another one is still in flight on
    /// the same service instance.
    #[error("A generation session is already in flight")]
    AlreadyInFlight,
}
