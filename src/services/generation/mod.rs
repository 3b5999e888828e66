//! Generation service: one request/response session per call, streaming or
//! buffered.

mod service;
mod validation;

pub use service::GenerationServiceImpl;
pub use validation::validate_generate_request;

use async_trait::async_trait;

use crate::error::SitegenResult;
use crate::types::{GenerationRequest, GenerationResult};

/// Callback invoked with each intermediate normalized document during a
/// streaming session.
pub type PartialHandler = Box<dyn FnMut(&str) + Send>;

/// Coordinates one end-to-end generation session.
///
/// A session is one `generate` (or `improve`) call: request construction,
/// transport, stream consumption, and final result or typed failure. Callers
/// must keep at most one session in flight per service instance; an
/// overlapping call is rejected with
/// [`SessionError::AlreadyInFlight`](crate::error::SessionError). There is no
/// mid-stream cancellation: a session runs to completion or failure once
/// started.
///
/// During a streaming session the partial callback is invoked in chunk order,
/// only once the normalized document is non-empty, and only when a chunk
/// actually changed it.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Run one generation session.
    ///
    /// With `on_partial`, the response body is consumed incrementally and
    /// every change to the normalized document is surfaced through the
    /// callback before the final document is returned. Without it, a single
    /// buffered request is issued and the upstream's structured result is
    /// returned as-is.
    async fn generate(
        &self,
        request: GenerationRequest,
        on_partial: Option<PartialHandler>,
    ) -> SitegenResult<GenerationResult>;

    /// Revise an existing document according to `instruction`.
    ///
    /// Pure request shaping over [`generate`](Self::generate): the
    /// instruction is wrapped into a prompt and `document` is sent verbatim
    /// as the previous context.
    async fn improve(
        &self,
        document: &str,
        instruction: &str,
        on_partial: Option<PartialHandler>,
    ) -> SitegenResult<GenerationResult>;
}
