//! Content upload service: publishes a finished document to the upload
//! endpoint.
//!
//! This is a boundary collaborator of the generation core, not part of it;
//! the generation service has no dependency on uploads.

mod service;
mod validation;

pub use service::UploadServiceImpl;
pub use validation::validate_upload_content;

use async_trait::async_trait;

use crate::error::SitegenResult;
use crate::types::UploadReceipt;

/// Uploads a complete document for permanent hosting.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Upload the given document.
    ///
    /// A non-success status surfaces the payload's error message; a success
    /// status returns the receipt as-is, including `success: false`
    /// rejections the caller is expected to inspect.
    async fn upload(&self, html_content: &str) -> SitegenResult<UploadReceipt>;
}
