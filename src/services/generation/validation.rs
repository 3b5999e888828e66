//! Request validation for the generation service.

use crate::error::{RequestError, SitegenResult};
use crate::types::GenerationRequest;

/// Validate a generation request before sending it.
pub fn validate_generate_request(request: &GenerationRequest) -> SitegenResult<()> {
    if request.prompt().trim().is_empty() {
        return Err(RequestError::Validation {
            message: "prompt must not be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
