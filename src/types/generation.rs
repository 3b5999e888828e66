//! Generation request/response types.

use serde::{Deserialize, Serialize};

/// A request for one generation session.
///
/// Immutable once constructed; build it with [`GenerationRequest::new`] and
/// [`GenerationRequest::with_previous_context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    previous_context: Option<String>,
}

impl GenerationRequest {
    /// Create a request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            previous_context: None,
        }
    }

    /// Attach the last accepted document as conversational memory.
    ///
    /// The service treats it as revisable state, not as a quotation to
    /// preserve verbatim.
    pub fn with_previous_context(mut self, context: impl Into<String>) -> Self {
        self.previous_context = Some(context.into());
        self
    }

    /// The instruction text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The prior document, if any.
    pub fn previous_context(&self) -> Option<&str> {
        self.previous_context.as_deref()
    }
}

/// The outcome of one successful generation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// The generated document. On the streaming path it is guaranteed to
    /// begin with a document-type declaration or a root-element open tag.
    pub document: String,
    /// Short human-readable status text.
    pub explanation: String,
}

/// Wire body of a generation request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequestBody<'a> {
    /// The instruction text.
    pub prompt: &'a str,
    /// The prior document, labeled separately from the instruction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_context: Option<&'a str>,
    /// Whether to stream the response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Wire body of a non-streaming generation response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GenerateResponseBody {
    /// The generated document.
    pub code: String,
    /// Short human-readable status text.
    #[serde(default)]
    pub explanation: String,
}

impl From<GenerateResponseBody> for GenerationResult {
    fn from(body: GenerateResponseBody) -> Self {
        Self {
            document: body.code,
            explanation: body.explanation,
        }
    }
}

/// Lifecycle state of one generation session.
///
/// A session moves `Idle` → `InFlight` when the call starts, then to exactly
/// one of `Completed` or `Failed`. Both are terminal: a new generation is a
/// new session, never a resumed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No request has been issued yet.
    Idle,
    /// The request is outstanding and chunks may still arrive.
    InFlight,
    /// The session produced a final document.
    Completed,
    /// The session ended with an error.
    Failed,
}

/// Predefined prompts for quick generation.
pub const QUICK_PROMPTS: &[&str] = &[
    "Create an SEO-optimized tech startup landing page with CSS hero graphics and glassmorphism",
    "Build a personal portfolio with CSS-drawn illustrations and SEO meta tags",
    "Design a modern blog layout with CSS graphics and optimized headings",
    "Create a product showcase with CSS-based visuals and structured data",
    "Build a restaurant website with CSS food illustrations and local SEO optimization",
    "Design a travel blog with CSS destination graphics and travel schema",
    "Create a fitness landing page with CSS workout icons and health-focused SEO",
    "Build a creative agency portfolio with CSS graphics and case studies",
    "Design an e-commerce product page with CSS product visuals and rich snippets",
    "Create a real estate website with CSS property graphics and location schema",
    "Build a photography portfolio with CSS gallery layouts and artist bio SEO",
    "Design a medical practice website with CSS health icons and health schema",
    "Create a construction company site with CSS project graphics and service SEO",
    "Build a fashion blog with CSS style graphics and fashion-focused keywords",
    "Design a technology review site with CSS tech icons and review schema",
];
