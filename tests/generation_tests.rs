//! Integration tests for the generation service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;

use sitegen_client::fixtures;
use sitegen_client::mocks::MockHttpTransport;
use sitegen_client::observability::create_noop_stack;
use sitegen_client::services::{GenerationService, GenerationServiceImpl, PartialHandler};
use sitegen_client::transport::{
    ChunkedStream, HttpMethod, HttpRequest, HttpResponse, HttpTransport, StreamingResponse,
    TransportError,
};
use sitegen_client::{
    GenerationRequest, SessionError, SitegenConfig, SitegenError,
};

/// Helper to create a test generation service with the given transport.
fn create_test_service(transport: Arc<dyn HttpTransport>) -> GenerationServiceImpl {
    let config = SitegenConfig::builder()
        .base_url("https://sitegen.example.com")
        .unwrap()
        .build()
        .unwrap();

    let (logger, tracer, metrics) = create_noop_stack("test");
    GenerationServiceImpl::new(&config, transport, logger, tracer, metrics)
}

/// Helper that records every partial update.
fn recording_handler(partials: Arc<Mutex<Vec<String>>>) -> PartialHandler {
    Box::new(move |text: &str| {
        partials.lock().unwrap().push(text.to_string());
    })
}

#[tokio::test]
async fn test_streaming_generation_success() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, fixtures::fenced_document_chunks());

    let service = create_test_service(transport.clone());
    let partials = Arc::new(Mutex::new(Vec::new()));

    // Act
    let result = service
        .generate(
            GenerationRequest::new("build a greeting page"),
            Some(recording_handler(partials.clone())),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(result.document, "<!DOCTYPE html><body>Hi</body></html>");
    assert!(!result.explanation.is_empty());

    let partials = partials.lock().unwrap();
    assert!(!partials.is_empty());
    assert!(partials.iter().all(|p| !p.is_empty()));

    transport.verify_request_count(1);
    transport.verify_request(0, HttpMethod::Post, "/api/generate");
}

#[tokio::test]
async fn test_streaming_request_carries_stream_flag() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, vec![Bytes::from("<p>x</p>")]);

    let service = create_test_service(transport.clone());

    // Act
    service
        .generate(
            GenerationRequest::new("anything"),
            Some(Box::new(|_| {})),
        )
        .await
        .unwrap();

    // Assert
    let body = transport.request_body_string(0);
    assert!(body.contains(r#""stream":true"#));
    transport.verify_header(0, "Content-Type", "application/json");
}

#[tokio::test]
async fn test_partial_updates_are_gated_and_ordered() {
    // Arrange - the first chunks normalize to nothing
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(
        200,
        vec![
            Bytes::from("  \n"),
            Bytes::from("```html\n"),
            Bytes::from("<h1>A</h1>"),
            Bytes::from("<p>B</p>\n```"),
        ],
    );

    let service = create_test_service(transport);
    let partials = Arc::new(Mutex::new(Vec::new()));

    // Act
    let result = service
        .generate(
            GenerationRequest::new("page"),
            Some(recording_handler(partials.clone())),
        )
        .await
        .unwrap();

    // Assert - no update until the first content chunk, then one per change
    let partials = partials.lock().unwrap();
    assert_eq!(partials.len(), 2);
    assert_eq!(partials[0], "<!DOCTYPE html>\n<h1>A</h1>");
    assert_eq!(partials[1], "<!DOCTYPE html>\n<h1>A</h1><p>B</p>");
    assert_eq!(result.document, *partials.last().unwrap());
}

#[tokio::test]
async fn test_streaming_error_status_surfaces_upstream_message() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(404, vec![Bytes::from(fixtures::RATE_LIMITED_BODY)]);

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), Some(Box::new(|_| {})))
        .await
        .unwrap_err();

    // Assert - the structured message, not a generic transport one
    assert_eq!(error.message(), "rate limited");
    assert_eq!(error.upstream_status(), Some(404));
}

#[tokio::test]
async fn test_buffered_error_status_surfaces_upstream_message() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(404, fixtures::RATE_LIMITED_BODY);

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), None)
        .await
        .unwrap_err();

    // Assert
    assert_eq!(error.message(), "rate limited");
    assert_eq!(error.upstream_status(), Some(404));
}

#[tokio::test]
async fn test_streaming_empty_body_fails() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, vec![]);

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), Some(Box::new(|_| {})))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::EmptyResponse));
}

#[tokio::test]
async fn test_streaming_fence_only_body_fails_as_empty() {
    // Arrange - bytes arrived, but nothing survives normalization
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, vec![Bytes::from("```html\n```")]);

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), Some(Box::new(|_| {})))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::EmptyResponse));
}

#[tokio::test]
async fn test_streaming_invalid_utf8_fails_with_decode_error() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(
        200,
        vec![Bytes::from("<p>ok</p>"), Bytes::from_static(&[0xFF, 0xFE])],
    );

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), Some(Box::new(|_| {})))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::Decode(_)));
}

#[tokio::test]
async fn test_streaming_truncated_character_fails_at_stream_end() {
    // Arrange - the stream stops in the middle of a multi-byte character
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(
        200,
        vec![Bytes::from("<p>caf"), Bytes::copy_from_slice(&"é".as_bytes()[..1])],
    );

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), Some(Box::new(|_| {})))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::Decode(_)));
}

#[tokio::test]
async fn test_streaming_transport_error_mid_stream() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_items(
        200,
        vec![
            Ok(Bytes::from("<p>partial</p>")),
            Err(TransportError::Stream("connection reset".to_string())),
        ],
    );

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), Some(Box::new(|_| {})))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::Transport(_)));
}

#[tokio::test]
async fn test_buffered_generation_success() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::GENERATE_SUCCESS_BODY);

    let service = create_test_service(transport.clone());

    // Act
    let result = service
        .generate(GenerationRequest::new("hello page"), None)
        .await
        .unwrap();

    // Assert - the structured payload passes through unmodified
    assert!(result.document.starts_with("<!DOCTYPE html>"));
    assert_eq!(result.explanation, "Generated a single-page site");

    // The buffered path must not ask for streaming
    let body = transport.request_body_string(0);
    assert!(!body.contains("stream"));
}

#[tokio::test]
async fn test_buffered_empty_body_fails() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, "");

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), None)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::EmptyResponse));
}

#[tokio::test]
async fn test_empty_prompt_is_rejected_before_sending() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    let service = create_test_service(transport.clone());

    // Act
    let error = service
        .generate(GenerationRequest::new("   "), None)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::Request(_)));
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_improve_sends_context_verbatim() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, fixtures::GENERATE_SUCCESS_BODY);

    let service = create_test_service(transport.clone());
    let document = "<!DOCTYPE html>\n<button>Go</button>";

    // Act
    service
        .improve(document, "make the button red", None)
        .await
        .unwrap();

    // Assert - instruction lands in the prompt, document in previousContext
    let body: serde_json::Value =
        serde_json::from_str(&transport.request_body_string(0)).unwrap();

    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("make the button red"));
    assert_eq!(body["previousContext"].as_str().unwrap(), document);
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_transport_error() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_error(TransportError::Connection("refused".to_string()));

    let service = create_test_service(transport);

    // Act
    let error = service
        .generate(GenerationRequest::new("page"), None)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(error, SitegenError::Transport(_)));
}

/// Transport that parks the first streaming call until released, so tests
/// can hold a session in flight deterministically.
struct GatedTransport {
    entered: Arc<tokio::sync::Notify>,
    release: Arc<tokio::sync::Notify>,
}

#[async_trait]
impl HttpTransport for GatedTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Request("buffered path not expected".to_string()))
    }

    async fn send_streaming(
        &self,
        _request: HttpRequest,
    ) -> Result<StreamingResponse, TransportError> {
        self.entered.notify_one();
        self.release.notified().await;

        let chunks: Vec<Result<Bytes, TransportError>> = vec![Ok(Bytes::from("<p>done</p>"))];
        let stream: ChunkedStream = Box::pin(stream::iter(chunks));
        Ok(StreamingResponse {
            status: 200,
            headers: Default::default(),
            stream,
        })
    }
}

#[tokio::test]
async fn test_overlapping_sessions_are_rejected() {
    // Arrange
    let entered = Arc::new(tokio::sync::Notify::new());
    let release = Arc::new(tokio::sync::Notify::new());
    let transport = Arc::new(GatedTransport {
        entered: entered.clone(),
        release: release.clone(),
    });

    let service = Arc::new(create_test_service(transport));

    // Act - hold one session open, then try a second one
    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .generate(GenerationRequest::new("first"), Some(Box::new(|_| {})))
                .await
        })
    };

    entered.notified().await;

    let overlap = service
        .generate(GenerationRequest::new("second"), Some(Box::new(|_| {})))
        .await;

    // Assert - the overlapping call fails fast with the dedicated error kind
    assert!(matches!(
        overlap,
        Err(SitegenError::Session(SessionError::AlreadyInFlight))
    ));

    // Releasing the first session lets it finish, and the slot frees up
    release.notify_one();
    let first_result = first.await.unwrap().unwrap();
    assert_eq!(first_result.document, "<!DOCTYPE html>\n<p>done</p>");

    // Pre-store a release permit so the next session passes the gate directly
    release.notify_one();
    let after = service
        .generate(GenerationRequest::new("third"), Some(Box::new(|_| {})))
        .await;
    assert!(after.is_ok());
}
