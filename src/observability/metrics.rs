//! Metrics recording implementation for the site-generation client.
//!
//! Provides trait-based metrics recording with support for counters,
//! histograms, and gauges.

use std::collections::HashMap;

/// Metrics recorder trait.
pub trait MetricsRecorder: Send + Sync {
    /// Increment a counter metric.
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]);

    /// Record a histogram value.
    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]);

    /// Record a gauge value.
    fn record_gauge(&self, name: &str, value: f64, labels: &[(&str, &str)]);
}

/// Client-specific metrics recorder with convenience methods.
pub struct SitegenMetrics {
    prefix: String,
    recorder: Box<dyn MetricsRecorder>,
}

impl SitegenMetrics {
    /// Create a new metrics wrapper.
    ///
    /// # Arguments
    /// * `prefix` - Metric name prefix (e.g., "sitegen")
    /// * `recorder` - The underlying metrics recorder implementation
    pub fn new(prefix: &str, recorder: Box<dyn MetricsRecorder>) -> Self {
        Self {
            prefix: prefix.to_string(),
            recorder,
        }
    }

    /// Record a complete API request with status and duration.
    pub fn record_request(&self, service: &str, method: &str, status: u16, duration_ms: u64) {
        let status_str = status.to_string();

        self.recorder.increment_counter(
            &format!("{}_requests_total", self.prefix),
            &[
                ("service", service),
                ("method", method),
                ("status", &status_str),
            ],
        );

        self.recorder.record_histogram(
            &format!("{}_request_duration_ms", self.prefix),
            duration_ms as f64,
            &[("service", service), ("method", method)],
        );

        if status >= 400 {
            self.recorder.increment_counter(
                &format!("{}_errors_total", self.prefix),
                &[
                    ("service", service),
                    ("method", method),
                    ("status", &status_str),
                ],
            );
        }
    }

    /// Record a streaming chunk received.
    pub fn record_stream_chunk(&self, service: &str, chunk_size: usize) {
        self.recorder.increment_counter(
            &format!("{}_stream_chunks_total", self.prefix),
            &[("service", service)],
        );

        self.recorder.record_histogram(
            &format!("{}_stream_chunk_size_bytes", self.prefix),
            chunk_size as f64,
            &[("service", service)],
        );
    }

    /// Record a partial document update surfaced to the caller.
    pub fn record_partial_update(&self, service: &str, document_size: usize) {
        self.recorder.increment_counter(
            &format!("{}_partial_updates_total", self.prefix),
            &[("service", service)],
        );

        self.recorder.record_histogram(
            &format!("{}_partial_update_size_bytes", self.prefix),
            document_size as f64,
            &[("service", service)],
        );
    }

    /// Record a rejected overlapping session.
    pub fn record_session_rejected(&self, service: &str) {
        self.recorder.increment_counter(
            &format!("{}_sessions_rejected_total", self.prefix),
            &[("service", service)],
        );
    }

    /// Record a content upload.
    pub fn record_upload(&self, content_size: usize) {
        self.recorder.increment_counter(
            &format!("{}_uploads_total", self.prefix),
            &[],
        );

        self.recorder.record_histogram(
            &format!("{}_upload_size_bytes", self.prefix),
            content_size as f64,
            &[],
        );
    }
}

/// Tracing-based metrics recorder implementation.
///
/// Emits metrics as tracing events, which can be consumed by various
/// tracing subscribers.
pub struct TracingMetricsRecorder;

impl TracingMetricsRecorder {
    /// Create a new tracing metrics recorder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingMetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder for TracingMetricsRecorder {
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::info!(
            metric_type = "counter",
            metric_name = name,
            metric_value = 1,
            labels = ?labels_map,
            "Counter incremented"
        );
    }

    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::info!(
            metric_type = "histogram",
            metric_name = name,
            metric_value = value,
            labels = ?labels_map,
            "Histogram recorded"
        );
    }

    fn record_gauge(&self, name: &str, value: f64, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::info!(
            metric_type = "gauge",
            metric_name = name,
            metric_value = value,
            labels = ?labels_map,
            "Gauge recorded"
        );
    }
}

/// Default metrics recorder implementation (no-op).
pub struct DefaultMetricsRecorder {
    _prefix: String,
}

impl DefaultMetricsRecorder {
    /// Creates a new default metrics recorder.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            _prefix: prefix.into(),
        }
    }
}

impl MetricsRecorder for DefaultMetricsRecorder {
    fn increment_counter(&self, _name: &str, _labels: &[(&str, &str)]) {}

    fn record_histogram(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {}

    fn record_gauge(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {}
}
