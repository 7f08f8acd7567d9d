//! The transport boundary: executing API requests over HTTP, singly or as an
//! all-or-nothing concurrent batch.

use std::collections::HashMap;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use crate::http::error::TransportError;
use crate::http::request::Request;

/// The decoded outcome of one network call: the JSON body plus the response
/// headers, kept so callers can read service metadata alongside the data.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub body: Value,
    pub headers: HashMap<String, Vec<String>>,
}

/// Executes [`Request`]s against the remote service.
///
/// `concurrent_requests` dispatches every request before awaiting any of
/// them and resolves only once all have completed. If any member fails, the
/// whole batch fails; no partial results are returned.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(&self, request: &Request) -> Result<RawResponse, TransportError>;

    async fn concurrent_requests(
        &self,
        requests: &[Request],
    ) -> Result<HashMap<String, RawResponse>, TransportError>;
}

/// reqwest-backed client.
///
/// Responses are requested with gzip transfer encoding and decompressed
/// transparently. The inner connection pool is shared, so one client can
/// serve any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct GzipHttpClient {
    client: Client,
}

impl GzipHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wraps a pre-configured reqwest client instead of the default one.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, request: &Request) -> Result<RawResponse, TransportError> {
        debug!("requesting {}", request.url());

        let response = self
            .client
            .get(request.url())
            .query(request.query())
            .send()
            .await
            .map_err(|e| TransportError::NetworkRequest(request.url().to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP request failed for {} with status {status}", request.url());
            return Err(TransportError::HttpStatus {
                url: request.url().to_string(),
                status,
            });
        }

        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in response.headers() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::JsonDecode(request.url().to_string(), e))?;

        Ok(RawResponse { body, headers })
    }
}

#[async_trait]
impl HttpClient for GzipHttpClient {
    async fn request(&self, request: &Request) -> Result<RawResponse, TransportError> {
        self.fetch(request).await
    }

    async fn concurrent_requests(
        &self,
        requests: &[Request],
    ) -> Result<HashMap<String, RawResponse>, TransportError> {
        debug!("dispatching {} concurrent requests", requests.len());

        let responses = try_join_all(requests.iter().map(|request| self.fetch(request))).await?;

        Ok(requests
            .iter()
            .map(|request| request.id().to_string())
            .zip(responses)
            .collect())
    }
}
