//! Mock implementations for testing.
//!
//! This module provides a mock transport for testing the client in
//! isolation, without real HTTP calls.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use futures::stream;

use crate::transport::{
    ChunkedStream, HttpMethod, HttpRequest, HttpResponse, HttpTransport, StreamingResponse,
    TransportError,
};

/// A queued streaming reply: status plus the chunk results to emit.
type QueuedStream = Result<(u16, Vec<Result<Bytes, TransportError>>), TransportError>;

/// Mock HTTP transport for testing.
///
/// Tests enqueue responses up front and verify the requests that were made.
/// Supports both buffered and streaming responses.
///
/// # Example
///
/// ```
/// use sitegen_client::mocks::MockHttpTransport;
///
/// let transport = MockHttpTransport::new();
/// transport.enqueue_json_response(200, r#"{"status": "ok"}"#);
/// ```
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    streaming_responses: Arc<Mutex<VecDeque<QueuedStream>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            streaming_responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = std::collections::HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        self.enqueue_response(Ok(HttpResponse {
            status,
            body: Bytes::from(body.to_string()),
            headers,
        }));
    }

    /// Enqueue an error response.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Enqueue a streaming response with the given status and chunks.
    pub fn enqueue_streaming_response(&self, status: u16, chunks: Vec<Bytes>) {
        let items = chunks.into_iter().map(Ok).collect();
        self.streaming_responses
            .lock()
            .unwrap()
            .push_back(Ok((status, items)));
    }

    /// Enqueue a streaming response whose chunks may include mid-stream
    /// errors.
    pub fn enqueue_streaming_items(
        &self,
        status: u16,
        items: Vec<Result<Bytes, TransportError>>,
    ) {
        self.streaming_responses
            .lock()
            .unwrap()
            .push_back(Ok((status, items)));
    }

    /// Enqueue a streaming request that fails before any response arrives.
    pub fn enqueue_streaming_error(&self, error: TransportError) {
        self.streaming_responses.lock().unwrap().push_back(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Get the body of the request at `index` as a string.
    pub fn request_body_string(&self, index: usize) -> String {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        requests[index]
            .body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).to_string())
            .unwrap_or_default()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.requests.lock().unwrap().len();
        assert_eq!(actual, expected, "Expected {} requests, got {}", expected, actual);
    }

    /// Verify that a request was made with the expected method and URL.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        assert_eq!(request.method, method, "Expected method {:?}, got {:?}", method, request.method);
        assert!(
            request.url.contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            request.url
        );
    }

    /// Verify that a request contains a specific header.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        let actual_value = request.headers.get(header_name);
        assert_eq!(
            actual_value,
            Some(&header_value.to_string()),
            "Expected header '{}' to be '{}', got {:?}",
            header_name,
            header_value,
            actual_value
        );
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No response configured in MockHttpTransport".to_string(),
                ))
            })
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        let (status, items) = self
            .streaming_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No streaming response configured in MockHttpTransport".to_string(),
                ))
            })?;

        let stream: ChunkedStream = Box::pin(stream::iter(items));
        Ok(StreamingResponse {
            status,
            headers: std::collections::HashMap::new(),
            stream,
        })
    }
}
