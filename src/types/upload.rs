//! Content upload types.

use serde::{Deserialize, Serialize};

/// Wire body of an upload request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequestBody<'a> {
    /// The complete document to publish.
    pub html_content: &'a str,
}

/// Result of a content upload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    /// Whether the upload was accepted.
    pub success: bool,
    /// Identifier of the stored transaction.
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// URL the content is served from.
    #[serde(default)]
    pub gateway_url: Option<String>,
    /// URL of the transaction in the explorer.
    #[serde(default)]
    pub explorer_url: Option<String>,
    /// Error message when the upload was rejected.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_request_body_wire_shape() {
        let body = UploadRequestBody {
            html_content: "<html></html>",
        };
        let json = serde_json::to_string(&body).unwrap();

        assert_eq!(json, r#"{"htmlContent":"<html></html>"}"#);
    }

    #[test]
    fn test_receipt_deserializes_success() {
        let receipt: UploadReceipt = serde_json::from_str(
            r#"{"success":true,"transactionId":"tx1","gatewayUrl":"https://gw/tx1","explorerUrl":"https://ex/tx1"}"#,
        )
        .unwrap();

        assert!(receipt.success);
        assert_eq!(receipt.transaction_id.as_deref(), Some("tx1"));
        assert_eq!(receipt.gateway_url.as_deref(), Some("https://gw/tx1"));
        assert!(receipt.error.is_none());
    }

    #[test]
    fn test_receipt_deserializes_failure() {
        let receipt: UploadReceipt =
            serde_json::from_str(r#"{"success":false,"error":"wallet not funded"}"#).unwrap();

        assert!(!receipt.success);
        assert_eq!(receipt.error.as_deref(), Some("wallet not funded"));
    }
}
