//! HTTP execution seam.
//!
//! The client only needs "send this request, give me status and body". That
//! capability is the [`HttpExecutor`] trait, so tests can script responses and
//! callers can bring their own HTTP stack. [`ReqwestExecutor`] is the default.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};

use crate::error::{PayError, PayResult};

/// Content type of every gateway request.
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// An outbound HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// A POST carrying an XML body.
    pub fn post_xml(url: &str, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            url: url.to_string(),
            headers: vec![(CONTENT_TYPE.as_str().to_string(), XML_CONTENT_TYPE.to_string())],
            body,
        }
    }

    /// Value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes HTTP requests on behalf of the client.
///
/// Implementations own timeouts, TLS and cancellation. Network failures must be
/// reported as [`PayError::Transport`]; non-2xx statuses are returned as
/// ordinary responses.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Send the request and return the response status and body.
    async fn execute(&self, request: HttpRequest) -> PayResult<HttpResponse>;
}

/// [`HttpExecutor`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Create an executor with the given timeout and an XML content-type default.
    pub fn new(timeout: Duration) -> PayResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| PayError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> PayResult<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .body(request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

impl std::fmt::Debug for ReqwestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestExecutor").finish_non_exhaustive()
    }
}
