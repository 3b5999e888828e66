//! Span-based tracing implementation for the site-generation client.
//!
//! Provides trait-based tracing with span management and attribute tracking.

use std::collections::HashMap;
use std::time::Instant;

/// Tracer trait for creating and managing spans.
pub trait Tracer: Send + Sync {
    /// Start a new span with the given name.
    fn start_span(&self, name: &str) -> Box<dyn Span>;
}

/// Span trait representing a traced operation.
///
/// Spans track the duration and context of operations. They can have
/// attributes attached and are marked with a status on completion.
pub trait Span: Send {
    /// Set an attribute on the span.
    fn set_attribute(&mut self, key: &str, value: &str);

    /// Set the span status.
    fn set_status(&mut self, status: SpanStatus);

    /// Record an event on the span.
    fn add_event(&mut self, name: &str, attributes: Option<HashMap<String, String>>);

    /// End the span and record its duration.
    fn end(self: Box<Self>);
}

/// Status of a span.
#[derive(Debug, Clone)]
pub enum SpanStatus {
    /// Operation completed successfully.
    Ok,
    /// Operation failed with an error message.
    Error(String),
}

/// Tracing-based tracer implementation.
pub struct TracingTracer {
    service_name: String,
}

impl TracingTracer {
    /// Create a new tracing tracer.
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
        }
    }
}

impl Tracer for TracingTracer {
    fn start_span(&self, name: &str) -> Box<dyn Span> {
        let span = TracingSpan {
            name: name.to_string(),
            service_name: self.service_name.clone(),
            start: Instant::now(),
            attributes: HashMap::new(),
            events: Vec::new(),
            status: None,
        };

        tracing::debug!(
            service = %self.service_name,
            span_name = %name,
            "Span started"
        );

        Box::new(span)
    }
}

/// Span implementation using the tracing crate.
pub struct TracingSpan {
    name: String,
    service_name: String,
    start: Instant,
    attributes: HashMap<String, String>,
    events: Vec<SpanEvent>,
    status: Option<SpanStatus>,
}

struct SpanEvent {
    #[allow(dead_code)]
    name: String,
    #[allow(dead_code)]
    attributes: HashMap<String, String>,
}

impl Span for TracingSpan {
    fn set_attribute(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());

        tracing::trace!(
            span_name = %self.name,
            attribute_key = %key,
            attribute_value = %value,
            "Span attribute set"
        );
    }

    fn set_status(&mut self, status: SpanStatus) {
        match &status {
            SpanStatus::Ok => {
                tracing::debug!(
                    span_name = %self.name,
                    "Span completed successfully"
                );
            }
            SpanStatus::Error(msg) => {
                tracing::error!(
                    span_name = %self.name,
                    error = %msg,
                    "Span failed"
                );
            }
        }
        self.status = Some(status);
    }

    fn add_event(&mut self, name: &str, attributes: Option<HashMap<String, String>>) {
        let attrs = attributes.unwrap_or_default();

        tracing::debug!(
            span_name = %self.name,
            event_name = %name,
            event_attributes = ?attrs,
            "Span event recorded"
        );

        self.events.push(SpanEvent {
            name: name.to_string(),
            attributes: attrs,
        });
    }

    fn end(self: Box<Self>) {
        let duration = self.start.elapsed();
        let duration_ms = duration.as_millis();

        let status_str = match &self.status {
            Some(SpanStatus::Ok) => "ok",
            Some(SpanStatus::Error(_)) => "error",
            None => "unknown",
        };

        tracing::info!(
            service = %self.service_name,
            span_name = %self.name,
            duration_ms = duration_ms,
            status = status_str,
            attributes = ?self.attributes,
            event_count = self.events.len(),
            "Span ended"
        );
    }
}

/// Default tracer implementation (no-op).
pub struct DefaultTracer {
    _prefix: String,
}

impl DefaultTracer {
    /// Creates a new default tracer.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            _prefix: prefix.into(),
        }
    }
}

impl Tracer for DefaultTracer {
    fn start_span(&self, _name: &str) -> Box<dyn Span> {
        Box::new(NoOpSpan)
    }
}

/// No-op span implementation.
struct NoOpSpan;

impl Span for NoOpSpan {
    fn set_attribute(&mut self, _key: &str, _value: &str) {}
    fn set_status(&mut self, _status: SpanStatus) {}
    fn add_event(&mut self, _name: &str, _attributes: Option<HashMap<String, String>>) {}
    fn end(self: Box<Self>) {}
}
