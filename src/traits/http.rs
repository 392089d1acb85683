//! HTTP client trait abstraction.
//!
//! Every call to the identity provider and to Drive goes through
//! [`HttpClient`], so the auth flow, the folder lister and the uploader can
//! run against the real reqwest adapter or a recording mock.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// Build a header map carrying a bearer token.
pub fn bearer(token: &str) -> Headers {
    let mut headers = Headers::new();
    headers.insert("Authorization".to_string(), format!("Bearer {}", token));
    headers
}

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a JSON response from a `serde_json::Value`.
    pub fn json_value(status: u16, value: serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::with_headers(status, headers, Bytes::from(value.to_string()))
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// First 200 characters of the body, for error messages.
    pub fn body_preview(&self) -> String {
        let text = String::from_utf8_lossy(&self.body);
        text.chars().take(200).collect()
    }
}

/// One part of a `multipart/form-data` request body.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    /// Form field name
    pub name: String,
    /// File name advertised in the part's Content-Disposition
    pub file_name: Option<String>,
    /// MIME type of the part
    pub content_type: String,
    /// Raw part body
    pub body: Bytes,
}

impl MultipartPart {
    /// A JSON part, as used for Drive upload metadata.
    pub fn json(name: &str, value: &serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            file_name: None,
            content_type: "application/json".to_string(),
            body: Bytes::from(value.to_string()),
        }
    }

    /// A file part with raw bytes.
    pub fn file(name: &str, file_name: &str, content_type: &str, body: Bytes) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            content_type: content_type.to_string(),
            body,
        }
    }
}

/// HTTP client errors.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Connection failed
    ConnectionFailed(String),
    /// Request timeout
    Timeout(String),
    /// Request could not be built (bad header, bad MIME type)
    InvalidRequest(String),
    /// Invalid URL
    InvalidUrl(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for HTTP client operations.
///
/// Non-2xx statuses are returned as `Ok(Response)`; only transport-level
/// failures are errors. Callers decide what a status means.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Perform a POST with an `application/x-www-form-urlencoded` body.
    async fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
        headers: &Headers,
    ) -> Result<Response, HttpError>;

    /// Perform a POST with a `multipart/form-data` body.
    async fn post_multipart(
        &self,
        url: &str,
        parts: Vec<MultipartPart>,
        headers: &Headers,
    ) -> Result<Response, HttpError>;
}
