// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::crpt::errors::CrptValidationError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("API configuration error: {0}")]
    ApiConfig(#[from] CrptValidationError),
}
