//! Mock HTTP client for testing.
//!
//! Returns configured responses or errors and records every request so tests
//! can assert on the exact sequence of calls.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, MultipartPart, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Form fields (for form POSTs)
    pub form: Vec<(String, String)>,
    /// Multipart parts (for multipart POSTs)
    pub parts: Vec<MultipartPart>,
}

impl RecordedRequest {
    /// Look up a form field by name.
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Responses are matched by URL: queued one-shot responses first, then an
/// exact match, then the longest configured prefix, then the default.
///
/// # Example
///
/// ```ignore
/// use app_fotos::adapters::mock::{MockHttpClient, MockResponse};
/// use app_fotos::traits::{HttpClient, Response, Headers};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://oauth2.googleapis.com/token",
///     MockResponse::Success(Response::json_value(200, serde_json::json!({"access_token": "T"}))),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            queued: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL (exact or prefix match).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a one-shot response for a URL prefix. Queued responses are
    /// consumed in FIFO order before any fixed response applies.
    pub fn enqueue_response(&self, url: &str, response: MockResponse) {
        let mut queued = self.queued.lock().unwrap();
        queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded requests.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record_request(&self, request: RecordedRequest) {
        self.requests.lock().unwrap().push(request);
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        {
            let mut queued = self.queued.lock().unwrap();
            let key = queued
                .iter()
                .filter(|(pattern, items)| url.starts_with(pattern.as_str()) && !items.is_empty())
                .map(|(pattern, _)| pattern.clone())
                .max_by_key(|pattern| pattern.len());
            if let Some(key) = key {
                if let Some(response) = queued.get_mut(&key).and_then(|q| q.pop_front()) {
                    return Some(response);
                }
            }
        }

        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let best_prefix = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if best_prefix.is_some() {
            return best_prefix;
        }

        self.default_response.lock().unwrap().clone()
    }

    fn respond(&self, url: &str) -> Result<Response, HttpError> {
        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(RecordedRequest {
            method: "GET".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            form: Vec::new(),
            parts: Vec::new(),
        });
        self.respond(url)
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request(RecordedRequest {
            method: "POST".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            form: fields.to_vec(),
            parts: Vec::new(),
        });
        self.respond(url)
    }

    async fn post_multipart(
        &self,
        url: &str,
        parts: Vec<MultipartPart>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request(RecordedRequest {
            method: "POST".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            form: Vec::new(),
            parts,
        });
        self.respond(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/test",
            MockResponse::Success(Response::new(200, Bytes::from("Hello"))),
        );

        let response = client
            .get("https://example.com/test", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com",
            MockResponse::Success(Response::new(404, Bytes::new())),
        );
        client.set_response(
            "https://example.com/files",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );

        let response = client
            .get("https://example.com/files?q=x", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_queued_responses_are_consumed_in_order() {
        let client = MockHttpClient::new();
        client.enqueue_response(
            "https://example.com/upload",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );
        client.enqueue_response(
            "https://example.com/upload",
            MockResponse::Success(Response::new(500, Bytes::new())),
        );
        client.set_response(
            "https://example.com/upload",
            MockResponse::Success(Response::new(201, Bytes::new())),
        );

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let response = client
                .post_multipart("https://example.com/upload?x=1", Vec::new(), &Headers::new())
                .await
                .unwrap();
            statuses.push(response.status);
        }
        assert_eq!(statuses, vec![200, 500, 201]);
    }

    #[tokio::test]
    async fn test_post_form_records_fields() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));

        let fields = vec![("code".to_string(), "abc".to_string())];
        client
            .post_form("https://example.com/token", &fields, &Headers::new())
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests[0].form_value("code"), Some("abc"));
        assert_eq!(requests[0].form_value("missing"), None);
    }

    #[tokio::test]
    async fn test_error_and_missing_responses() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let down = client.get("https://example.com/down", &Headers::new()).await;
        assert!(matches!(down, Err(HttpError::ConnectionFailed(_))));

        let missing = client.get("https://other.com", &Headers::new()).await;
        assert!(matches!(missing, Err(HttpError::Other(_))));
        assert_eq!(client.request_count(), 2);
    }
}
