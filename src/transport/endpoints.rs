//! Endpoint path constants for the site-generation service.

/// Path of the generation endpoint.
///
/// Accepts `POST` with a JSON body of `{ prompt, previousContext?, stream? }`.
pub const GENERATE: &str = "/api/generate";

/// Path of the content upload endpoint.
///
/// Accepts `POST` with a JSON body of `{ htmlContent }`.
pub const UPLOAD: &str = "/api/upload-to-irys";
