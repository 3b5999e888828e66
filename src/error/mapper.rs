//! Error mapping for HTTP status codes and error response bodies.

use serde::Deserialize;

use super::types::SitegenError;

/// Structured error payload returned by the generation service.
///
/// Every non-success status carries a single JSON object of this shape,
/// on the streaming path as well as the non-streaming one.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Maps a non-success HTTP status and its response body to a [`SitegenError`].
///
/// The body is expected to be a JSON object with an `error` field. When it is
/// not, the raw body text is used; a bare `HTTP <status>` message is the last
/// resort for an empty or unreadable body.
pub fn map_error_response(status: u16, body: &[u8]) -> SitegenError {
    let message = match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            if text.is_empty() {
                format!("HTTP {}", status)
            } else {
                text.to_string()
            }
        }
    };

    SitegenError::Upstream { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_structured_error_body() {
        let error = map_error_response(404, br#"{"error":"rate limited"}"#);
        match error {
            SitegenError::Upstream { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "rate limited");
            }
            other => panic!("Expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_plain_text_body() {
        let error = map_error_response(500, b"something broke");
        match error {
            SitegenError::Upstream { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "something broke");
            }
            other => panic!("Expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_empty_body_falls_back_to_status() {
        let error = map_error_response(503, b"");
        assert_eq!(error.message(), "HTTP 503");
    }

    #[test]
    fn test_map_ignores_extra_fields() {
        let error = map_error_response(400, br#"{"success":false,"error":"no content"}"#);
        assert_eq!(error.message(), "no content");
    }
}
