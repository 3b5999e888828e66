//! # Site Generation Client
//!
//! Production-ready Rust client for a streaming website-generation service:
//! describe a website in natural language, receive a complete self-contained
//! HTML document, rendered incrementally as the upstream model produces it.
//!
//! ## Features
//!
//! - Streaming consumption of chunked generation responses, with stateful
//!   UTF-8 decoding across chunk boundaries
//! - Whole-buffer normalization after every chunk: fence markers stripped
//!   wherever they fall, doctype guaranteed on the final document
//! - Partial-update callbacks that never fire on empty or unchanged output
//! - Session lifecycle with single-in-flight enforcement and a stable,
//!   message-first error contract
//! - Context chaining: revise the previous document with a new instruction
//! - Content upload to permanent hosting
//! - Comprehensive observability (tracing, logging, metrics)
//! - Type-safe request/response models and a mockable transport
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sitegen_client::{create_client, SitegenConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SitegenConfig::builder()
//!         .base_url("https://sitegen.example.com")?
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!
//!     // Or create from environment variables
//!     // let client = sitegen_client::create_client_from_env()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `transport` - HTTP transport layer and endpoints
//! - `streaming` - Byte-stream decoding and document normalization
//! - `error` - Error types and taxonomy
//! - `types` - Core types (requests, results, receipts)
//! - `services` - Service implementations (generation, upload)

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod services;
pub mod streaming;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod fixtures;
pub mod mocks;

// Re-exports for convenience
pub use client::{
    create_client, create_client_from_env,
    SitegenClient, SitegenClientBuilder, SitegenClientImpl,
};
pub use config::{
    LogLevel, SitegenConfig, SitegenConfigBuilder,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
pub use error::{
    // Main error types
    SitegenError,
    SitegenResult,
    // Error categories
    ConfigurationError,
    DecodeError,
    RequestError,
    ResponseError,
    SessionError,
    // Error mapping utilities
    map_error_response,
    ApiErrorBody,
};
pub use transport::{
    ChunkedStream, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    RequestBuilder, ResponseParser, StreamingResponse, TransportError,
};

// Type re-exports
pub use types::{
    GenerationRequest, GenerationResult, SessionState,
    GenerateRequestBody, GenerateResponseBody,
    UploadReceipt, UploadRequestBody,
    QUICK_PROMPTS,
};

// Service re-exports
pub use services::{
    GenerationService, GenerationServiceImpl, PartialHandler,
    UploadService, UploadServiceImpl,
};

// Streaming re-exports
pub use streaming::{normalize, StreamBuffer, Utf8StreamDecoder};

// Observability re-exports
pub use observability::{
    // Logging
    Logger, StructuredLogger, DefaultLogger,
    // Tracing
    Tracer, Span, SpanStatus, TracingTracer, TracingSpan, DefaultTracer,
    // Metrics
    MetricsRecorder, SitegenMetrics, TracingMetricsRecorder, DefaultMetricsRecorder,
    // Factory functions
    create_default_stack, create_noop_stack,
};
