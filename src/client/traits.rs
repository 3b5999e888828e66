//! Client trait definitions.

use crate::services::{GenerationService, UploadService};

/// Main client for the site-generation service.
pub trait SitegenClient: Send + Sync {
    /// Access the generation service.
    fn generation(&self) -> &dyn GenerationService;

    /// Access the upload service.
    fn upload(&self) -> &dyn UploadService;
}
