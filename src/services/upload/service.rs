//! Upload service implementation.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::json;

use super::UploadService;
use super::validation::validate_upload_content;
use crate::config::SitegenConfig;
use crate::error::{SitegenError, SitegenResult};
use crate::observability::{Logger, SitegenMetrics, SpanStatus, Tracer};
use crate::transport::{endpoints, HttpMethod, HttpTransport, RequestBuilder, ResponseParser};
use crate::types::{UploadReceipt, UploadRequestBody};

/// Implementation of the [`UploadService`].
pub struct UploadServiceImpl {
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
    logger: Arc<dyn Logger>,
    tracer: Arc<dyn Tracer>,
    metrics: Arc<SitegenMetrics>,
}

impl UploadServiceImpl {
    /// Create a new upload service.
    pub fn new(
        config: &SitegenConfig,
        transport: Arc<dyn HttpTransport>,
        logger: Arc<dyn Logger>,
        tracer: Arc<dyn Tracer>,
        metrics: Arc<SitegenMetrics>,
    ) -> Self {
        Self {
            transport,
            request_builder: RequestBuilder::new(config.base_url.clone()),
            logger,
            tracer,
            metrics,
        }
    }

    async fn send_upload(&self, html_content: &str) -> SitegenResult<UploadReceipt> {
        let body = UploadRequestBody { html_content };
        let http_request = self.request_builder.build_request(
            HttpMethod::Post,
            endpoints::UPLOAD,
            Some(&body),
            None,
        )?;

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(SitegenError::Transport)?;

        ResponseParser::parse_response(response)
    }
}

#[async_trait]
impl UploadService for UploadServiceImpl {
    async fn upload(&self, html_content: &str) -> SitegenResult<UploadReceipt> {
        let mut span = self.tracer.start_span("sitegen.upload.upload");
        span.set_attribute("service", "upload");

        let start = Instant::now();

        self.logger.debug("Starting upload", json!({
            "content_bytes": html_content.len(),
        }));

        // 1. Validate the content
        if let Err(e) = validate_upload_content(html_content) {
            span.set_status(SpanStatus::Error(e.message()));
            span.end();
            return Err(e);
        }

        // 2. Build and send the request
        let outcome = self.send_upload(html_content).await;

        // 3. Record the outcome
        let duration = start.elapsed();
        match &outcome {
            Ok(receipt) => {
                self.metrics.record_request("upload", "upload", 200, duration.as_millis() as u64);
                self.metrics.record_upload(html_content.len());

                if receipt.success {
                    self.logger.info("Upload completed", json!({
                        "duration_ms": duration.as_millis() as u64,
                        "transaction_id": receipt.transaction_id,
                        "gateway_url": receipt.gateway_url,
                    }));
                    span.set_status(SpanStatus::Ok);
                } else {
                    self.logger.warn("Upload rejected by service", json!({
                        "duration_ms": duration.as_millis() as u64,
                        "error": receipt.error,
                    }));
                    span.set_status(SpanStatus::Error(
                        receipt.error.clone().unwrap_or_else(|| "upload rejected".to_string()),
                    ));
                }
            }
            Err(e) => {
                if let Some(status) = e.upstream_status() {
                    self.metrics.record_request("upload", "upload", status, duration.as_millis() as u64);
                }
                self.logger.error("Upload failed", json!({
                    "duration_ms": duration.as_millis() as u64,
                    "error": e.message(),
                }));
                span.set_status(SpanStatus::Error(e.message()));
            }
        }
        span.end();

        outcome
    }
}
