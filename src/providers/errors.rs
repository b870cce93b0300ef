// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the remote API.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid client token header: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("HTTP {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}
