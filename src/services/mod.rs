//! Service implementations for the site-generation client.

pub mod generation;
pub mod upload;

pub use generation::{GenerationService, GenerationServiceImpl, PartialHandler};
pub use upload::{UploadService, UploadServiceImpl};
