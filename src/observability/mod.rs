//! Observability layer for the site-generation client.
//!
//! Provides trait-based abstractions for:
//! - **Logging**: structured logging with sensitive data redaction
//! - **Tracing**: spans with attributes and statuses
//! - **Metrics**: counters and histograms for requests and stream activity
//!
//! # Examples
//!
//! ```rust
//! use sitegen_client::observability::{Logger, StructuredLogger};
//! use serde_json::json;
//!
//! let logger = StructuredLogger::new("sitegen.generation");
//! logger.info("Starting generation", json!({ "streaming": true }));
//! ```

pub mod logging;
pub mod metrics;
pub mod tracing;

use std::sync::Arc;

// Re-export main types for convenience
pub use logging::{DefaultLogger, Logger, StructuredLogger};
pub use metrics::{DefaultMetricsRecorder, MetricsRecorder, SitegenMetrics, TracingMetricsRecorder};
pub use tracing::{DefaultTracer, Span, SpanStatus, Tracer, TracingSpan, TracingTracer};

/// Create a default observability stack.
///
/// Returns (logger, tracer, metrics) backed by the `tracing` crate.
pub fn create_default_stack(
    service_name: &str,
) -> (Arc<dyn Logger>, Arc<dyn Tracer>, Arc<SitegenMetrics>) {
    let logger = Arc::new(StructuredLogger::new(service_name));
    let tracer = Arc::new(TracingTracer::new(service_name));
    let metrics = Arc::new(SitegenMetrics::new(
        service_name,
        Box::new(TracingMetricsRecorder::new()),
    ));

    (logger, tracer, metrics)
}

/// Create a no-op observability stack.
///
/// Returns (logger, tracer, metrics) with implementations suitable for tests
/// or for callers that disable observability.
pub fn create_noop_stack(
    service_name: &str,
) -> (Arc<dyn Logger>, Arc<dyn Tracer>, Arc<SitegenMetrics>) {
    let logger = Arc::new(DefaultLogger::new(service_name));
    let tracer = Arc::new(DefaultTracer::new(service_name));
    let metrics = Arc::new(SitegenMetrics::new(
        service_name,
        Box::new(DefaultMetricsRecorder::new(service_name)),
    ));

    (logger, tracer, metrics)
}
