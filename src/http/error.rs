use thiserror::Error;

/// Raised by the HTTP client when a network call fails.
///
/// Transport failures are surfaced unchanged; the core performs no retries
/// and no recovery. In a concurrent batch the first failure aborts the
/// whole call.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode the JSON response body for {0}")]
    JsonDecode(String, #[source] reqwest::Error),
}
