// 3rd party crates
use thiserror::Error;

// Project imports
use crate::models::Document;

/// Outcome of a document submission, as seen by the caller.
///
/// Failures past validation are deliberately collapsed into
/// `SubmissionFailed`; the reason string is for diagnostics only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid value of the document")]
    InvalidDocument,

    #[error("Client token is missing")]
    MissingToken,

    #[error("The document wasn't sent: {reason}")]
    SubmissionFailed {
        document: Box<Document>,
        reason: String,
    },
}

/// Errors raised while building the API client.
#[derive(Debug, Error)]
pub enum CrptError {
    #[error("Invalid API configuration: {0}")]
    Validation(#[from] CrptValidationError),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

#[derive(Debug, Error)]
pub enum CrptValidationError {
    #[error("base_url must not be empty")]
    MissingBaseUrl,
    #[error("Invalid base_url '{0}'")]
    InvalidBaseUrl(String),
    #[error("oms_id must not be empty")]
    MissingOmsId,
    #[error("user_name must not be empty")]
    MissingUserName,
    #[error("timeout_secs must be greater than 0")]
    InvalidTimeout,
}
