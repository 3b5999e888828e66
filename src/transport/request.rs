//! HTTP request builder for the site-generation service.
//!
//! This module provides the `RequestBuilder` for constructing HTTP requests
//! with proper headers, URL joining, and body serialization.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

use crate::error::SitegenError;
use super::http::{HttpRequest, HttpMethod};

/// Builder for constructing HTTP requests to the site-generation service.
///
/// The `RequestBuilder` handles:
/// - URL construction against the configured base URL
/// - Header management (Content-Type, custom headers)
/// - Request body serialization
#[derive(Clone)]
pub struct RequestBuilder {
    /// Base URL for the service.
    base_url: Url,
}

impl RequestBuilder {
    /// Creates a new request builder for the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Builds a complete URL for the given path.
    pub fn build_url(&self, path: &str) -> Result<Url, SitegenError> {
        let path = path.trim_start_matches('/');
        let url = self.base_url.join(path)?;
        Ok(url)
    }

    /// Builds an HTTP request with the given parameters.
    ///
    /// Serializes `body` to JSON when present and sets `Content-Type`
    /// accordingly; `extra_headers` are merged in last.
    pub fn build_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<HttpRequest, SitegenError> {
        let url = self.build_url(path)?;

        let mut headers = HashMap::new();

        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let body_bytes = if let Some(body) = body {
            let json = serde_json::to_vec(body)?;
            Some(Bytes::from(json))
        } else {
            None
        };

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body: body_bytes,
        })
    }

    /// Builds a streaming HTTP request.
    ///
    /// Convenience wrapper around `build_request` for POST bodies aimed at
    /// the streaming endpoint.
    pub fn build_streaming_request<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<HttpRequest, SitegenError> {
        self.build_request(HttpMethod::Post, path, Some(body), None)
    }
}
