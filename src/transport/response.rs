//! HTTP response parser for the site-generation service.
//!
//! This module provides the `ResponseParser` for parsing HTTP responses and
//! mapping error payloads to typed errors.

use serde::de::DeserializeOwned;

use crate::error::{map_error_response, SitegenError};
use super::http::HttpResponse;

/// Parser for HTTP responses from the site-generation service.
///
/// The `ResponseParser` handles:
/// - Successful response deserialization
/// - Empty-body detection on success statuses
/// - Error response parsing and mapping to error types
/// - Request ID extraction for debugging
pub struct ResponseParser;

impl ResponseParser {
    /// Parses an HTTP response into the expected type.
    ///
    /// A success status with an empty (or all-whitespace) body is an
    /// [`SitegenError::EmptyResponse`]; a non-success status is mapped
    /// through [`map_error_response`] so the upstream message survives.
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, SitegenError> {
        if (200..300).contains(&response.status) {
            if response.body.iter().all(u8::is_ascii_whitespace) {
                return Err(SitegenError::EmptyResponse);
            }
            let parsed: T = serde_json::from_slice(&response.body)?;
            Ok(parsed)
        } else {
            Err(Self::parse_error_response(response))
        }
    }

    /// Parses an error response and maps it to the appropriate error type.
    pub fn parse_error_response(response: HttpResponse) -> SitegenError {
        let request_id = Self::extract_request_id(&response.headers);
        let error = map_error_response(response.status, &response.body);

        if let Some(ref id) = request_id {
            tracing::debug!(
                request_id = %id,
                status = response.status,
                error = ?error,
                "API error occurred"
            );
        }

        error
    }

    /// Extracts the request ID from response headers for debugging.
    pub fn extract_request_id(headers: &std::collections::HashMap<String, String>) -> Option<String> {
        let possible_headers = ["x-request-id", "request-id"];

        for (key, value) in headers {
            let key_lower = key.to_lowercase();
            if possible_headers.contains(&key_lower.as_str()) {
                return Some(value.clone());
            }
        }
        None
    }
}
