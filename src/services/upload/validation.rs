//! Request validation for the upload service.

use crate::error::{RequestError, SitegenResult};

/// Validate the document before uploading it.
pub fn validate_upload_content(html_content: &str) -> SitegenResult<()> {
    if html_content.trim().is_empty() {
        return Err(RequestError::Validation {
            message: "no HTML content provided for upload".to_string(),
        }
        .into());
    }

    Ok(())
}
