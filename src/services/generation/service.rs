//! Generation service implementation: session lifecycle around the streaming
//! consumer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::json;

use super::{GenerationService, PartialHandler};
use super::validation::validate_generate_request;
use crate::config::SitegenConfig;
use crate::error::{map_error_response, DecodeError, SessionError, SitegenError, SitegenResult};
use crate::observability::{Logger, SitegenMetrics, SpanStatus, Tracer};
use crate::streaming::{normalize, StreamBuffer};
use crate::transport::{endpoints, ChunkedStream, HttpMethod, HttpTransport, RequestBuilder, ResponseParser};
use crate::types::{GenerateRequestBody, GenerateResponseBody, GenerationRequest, GenerationResult, SessionState};

/// Status text attached to documents assembled from a stream. The buffered
/// path returns the upstream's own explanation instead.
const STREAM_EXPLANATION: &str = "Website generated successfully";

/// Implementation of the [`GenerationService`].
pub struct GenerationServiceImpl {
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
    logger: Arc<dyn Logger>,
    tracer: Arc<dyn Tracer>,
    metrics: Arc<SitegenMetrics>,
    in_flight: AtomicBool,
}

impl GenerationServiceImpl {
    /// Create a new generation service.
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
            in_flight: AtomicBool::new(false),
        }
    }

    /// Streaming path: consume the chunked body, surfacing every change to
    /// the normalized document, and return the final document.
    async fn generate_streaming(
        &self,
        request: &GenerationRequest,
        mut on_partial: PartialHandler,
    ) -> SitegenResult<GenerationResult> {
        let body = GenerateRequestBody {
            prompt: request.prompt(),
            previous_context: request.previous_context(),
            stream: Some(true),
        };
        let http_request = self
            .request_builder
            .build_streaming_request(endpoints::GENERATE, &body)?;

        let response = self
            .transport
            .send_streaming(http_request)
            .await
            .map_err(SitegenError::Transport)?;

        if !(200..300).contains(&response.status) {
            // A failed streaming request still carries one JSON error object
            // in the body.
            let error_body = drain_body(response.stream).await;
            return Err(map_error_response(response.status, &error_body));
        }

        let mut session = StreamingSession::new();
        session.start();

        // The stream is owned by this scope: every exit path, success or
        // error, drops it and releases the underlying connection.
        let mut stream = response.stream;
        while let Some(next) = stream.next().await {
            let chunk = match next {
                Ok(chunk) => chunk,
                Err(e) => {
                    session.fail();
                    return Err(SitegenError::Transport(e));
                }
            };

            self.metrics.record_stream_chunk("generation", chunk.len());

            match session.ingest(&chunk) {
                Ok(Some(document)) => {
                    self.metrics.record_partial_update("generation", document.len());
                    on_partial(document);
                }
                Ok(None) => {}
                Err(e) => return Err(e.into()),
            }
        }

        let document = session.finish()?;

        self.logger.debug("Streaming generation finished", json!({
            "document_chars": document.len(),
            "session_state": format!("{:?}", session.state()),
        }));

        Ok(GenerationResult {
            document,
            explanation: STREAM_EXPLANATION.to_string(),
        })
    }

    /// Buffered path: one request, one structured response.
    async fn generate_buffered(
        &self,
        request: &GenerationRequest,
    ) -> SitegenResult<GenerationResult> {
        let body = GenerateRequestBody {
            prompt: request.prompt(),
            previous_context: request.previous_context(),
            stream: None,
        };
        let http_request = self.request_builder.build_request(
            HttpMethod::Post,
            endpoints::GENERATE,
            Some(&body),
            None,
        )?;

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(SitegenError::Transport)?;

        let parsed: GenerateResponseBody = ResponseParser::parse_response(response)?;
        Ok(parsed.into())
    }
}

#[async_trait]
impl GenerationService for GenerationServiceImpl {
    async fn generate(
        &self,
        request: GenerationRequest,
        on_partial: Option<PartialHandler>,
    ) -> SitegenResult<GenerationResult> {
        let mut span = self.tracer.start_span("sitegen.generation.generate");
        span.set_attribute("service", "generation");
        span.set_attribute("streaming", if on_partial.is_some() { "true" } else { "false" });

        let start = Instant::now();

        self.logger.debug("Starting generation", json!({
            "prompt_chars": request.prompt().len(),
            "has_previous_context": request.previous_context().is_some(),
            "streaming": on_partial.is_some(),
        }));

        // 1. Validate the request
        if let Err(e) = validate_generate_request(&request) {
            span.set_status(SpanStatus::Error(e.message()));
            span.end();
            return Err(e);
        }

        // 2. Reject overlap with an outstanding session
        let guard = match InFlightGuard::acquire(&self.in_flight) {
            Ok(guard) => guard,
            Err(e) => {
                self.metrics.record_session_rejected("generation");
                self.logger.warn("Rejected overlapping generation session", json!({}));
                span.set_status(SpanStatus::Error(e.message()));
                span.end();
                return Err(e);
            }
        };

        // 3. Run the session on the requested path
        let outcome = match on_partial {
            Some(handler) => self.generate_streaming(&request, handler).await,
            None => self.generate_buffered(&request).await,
        };
        drop(guard);

        // 4. Record the outcome
        let duration = start.elapsed();
        match &outcome {
            Ok(result) => {
                self.metrics.record_request(
                    "generation",
                    "generate",
                    200,
                    duration.as_millis() as u64,
                );
                self.logger.info("Generation completed", json!({
                    "duration_ms": duration.as_millis() as u64,
                    "document_chars": result.document.len(),
                }));
                span.set_status(SpanStatus::Ok);
            }
            Err(e) => {
                if let Some(status) = e.upstream_status() {
                    self.metrics.record_request(
                        "generation",
                        "generate",
                        status,
                        duration.as_millis() as u64,
                    );
                }
                self.logger.error("Generation failed", json!({
                    "duration_ms": duration.as_millis() as u64,
                    "error": e.message(),
                }));
                span.set_status(SpanStatus::Error(e.message()));
            }
        }
        span.end();

        outcome
    }

    async fn improve(
        &self,
        document: &str,
        instruction: &str,
        on_partial: Option<PartialHandler>,
    ) -> SitegenResult<GenerationResult> {
        // Request shaping only: the prior document goes out verbatim as the
        // labeled context field, never folded into the prompt.
        let request = GenerationRequest::new(format!(
            "Improve the following website based on this request: \"{}\"",
            instruction
        ))
        .with_previous_context(document);

        self.generate(request, on_partial).await
    }
}

/// Clears the in-flight flag on drop, so every exit path releases it.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> SitegenResult<Self> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SessionError::AlreadyInFlight.into());
        }
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One streaming session: the buffer, the last surfaced document, and the
/// lifecycle state.
struct StreamingSession {
    buffer: StreamBuffer,
    last_update: String,
    state: SessionState,
}

impl StreamingSession {
    fn new() -> Self {
        Self {
            buffer: StreamBuffer::new(),
            last_update: String::new(),
            state: SessionState::Idle,
        }
    }

    fn start(&mut self) {
        self.state = SessionState::InFlight;
    }

    /// Ingest one chunk and derive the normalized view of the whole buffer.
    ///
    /// Returns the document when this chunk changed it to something
    /// non-empty; `None` keeps the caller from flashing an empty or
    /// unchanged document.
    fn ingest(&mut self, chunk: &[u8]) -> Result<Option<&str>, DecodeError> {
        if let Err(e) = self.buffer.ingest(chunk) {
            self.state = SessionState::Failed;
            return Err(e);
        }

        let normalized = normalize(self.buffer.as_str());
        if !normalized.is_empty() && normalized != self.last_update {
            self.last_update = normalized;
            Ok(Some(self.last_update.as_str()))
        } else {
            Ok(None)
        }
    }

    /// Close the session: check the decoder, run the final normalization,
    /// and transition to a terminal state.
    fn finish(&mut self) -> SitegenResult<String> {
        if let Err(e) = self.buffer.finish() {
            self.state = SessionState::Failed;
            return Err(e.into());
        }

        let document = normalize(self.buffer.as_str());
        if document.is_empty() {
            self.state = SessionState::Failed;
            return Err(SitegenError::EmptyResponse);
        }

        self.state = SessionState::Completed;
        Ok(document)
    }

    fn fail(&mut self) {
        self.state = SessionState::Failed;
    }

    fn state(&self) -> SessionState {
        self.state
    }
}

/// Drain a chunked body, tolerating stream errors after the first bytes.
async fn drain_body(mut stream: ChunkedStream) -> Vec<u8> {
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => body.extend_from_slice(&bytes),
            Err(_) => break,
        }
    }
    body
}
