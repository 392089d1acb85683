//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of [`HttpClient`] from `crate::traits`.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::traits::{Headers, HttpClient, HttpError, MultipartPart, Response};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use app_fotos::adapters::ReqwestHttpClient;
/// use app_fotos::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let response = client.get("https://www.googleapis.com/oauth2/v2/userinfo", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    /// Build a reqwest multipart form from our parts.
    fn build_form(parts: Vec<MultipartPart>) -> Result<Form, HttpError> {
        let mut form = Form::new();
        for part in parts {
            let mut reqwest_part = Part::bytes(part.body.to_vec())
                .mime_str(&part.content_type)
                .map_err(|e| HttpError::InvalidRequest(e.to_string()))?;
            if let Some(file_name) = part.file_name {
                reqwest_part = reqwest_part.file_name(file_name);
            }
            form = form.part(part.name, reqwest_part);
        }
        Ok(form)
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.get(url), headers);
        Self::send(builder).await
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.post(url).form(fields), headers);
        Self::send(builder).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        parts: Vec<MultipartPart>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let form = Self::build_form(parts)?;
        let builder = Self::apply_headers(self.client.post(url).multipart(form), headers);
        Self::send(builder).await
    }
}
