//! Canned payloads and chunk sequences for tests.

use bytes::Bytes;

/// Non-streaming success body from the generation endpoint.
pub const GENERATE_SUCCESS_BODY: &str =
    r#"{"code":"<!DOCTYPE html>\n<html><body><h1>Hello</h1></body></html>","explanation":"Generated a single-page site"}"#;

/// Error body the generation endpoint returns on a rate limit.
pub const RATE_LIMITED_BODY: &str = r#"{"error":"rate limited"}"#;

/// Upload receipt for an accepted document.
pub const UPLOAD_SUCCESS_BODY: &str = r#"{"success":true,"transactionId":"tx-123","gatewayUrl":"https://gateway.irys.xyz/tx-123","explorerUrl":"https://explorer.irys.xyz/tx-123"}"#;

/// Upload receipt for a rejected document.
pub const UPLOAD_FAILURE_BODY: &str = r#"{"success":false,"error":"wallet not funded"}"#;

/// A fenced document split across two chunks, with the fence markers
/// straddling the boundary.
pub fn fenced_document_chunks() -> Vec<Bytes> {
    vec![
        Bytes::from_static(b"```html\n<!DOCTYPE"),
        Bytes::from_static(b" html><body>Hi</body></html>\n```"),
    ]
}

/// A document containing a multi-byte character split across chunks.
pub fn multibyte_split_chunks() -> Vec<Bytes> {
    let bytes = "<p>caf\u{00e9}</p>".as_bytes();
    // Split inside the two-byte é
    let split = bytes.len() - 5;
    vec![
        Bytes::copy_from_slice(&bytes[..split]),
        Bytes::copy_from_slice(&bytes[split..]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_chunks_concatenate_to_full_document() {
        let joined: Vec<u8> = fenced_document_chunks()
            .iter()
            .flat_map(|b| b.to_vec())
            .collect();
        let text = String::from_utf8(joined).unwrap();

        assert!(text.starts_with("```html\n"));
        assert!(text.ends_with("```"));
    }

    #[test]
    fn test_multibyte_chunks_split_inside_character() {
        let chunks = multibyte_split_chunks();
        assert_eq!(chunks.len(), 2);
        // The first chunk must end mid-character
        assert!(std::str::from_utf8(&chunks[0]).is_err());
    }

    #[test]
    fn test_fixture_bodies_parse() {
        let value: serde_json::Value = serde_json::from_str(GENERATE_SUCCESS_BODY).unwrap();
        assert!(value.get("code").is_some());

        let value: serde_json::Value = serde_json::from_str(RATE_LIMITED_BODY).unwrap();
        assert_eq!(value["error"], "rate limited");
    }
}
