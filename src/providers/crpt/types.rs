// Standard library
use std::sync::Arc;

// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Project imports
use crate::metrics::MetricsManager;
use crate::providers::DocumentTransport;
use crate::utility::rate_limiter::RateLimiter;
use crate::validation::DocumentValidator;

// Current module imports
use super::constants::{default_timeout_secs, default_user_name};

/// Configuration for the document API.
#[derive(Debug, Deserialize, Clone)]
pub struct CrptConfig {
    /// Endpoint documents are posted to
    pub base_url: String,
    /// Identifier sent as the `omsId` query parameter
    pub oms_id: String,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// Upper bound for a single exchange
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Token used by the command line runner
    #[serde(default)]
    pub client_token: Option<String>,
}

/// reqwest backed transport for the document API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pub config: CrptConfig,
    pub client: Client,
}

/// Rate limited, validating client for the document API.
pub struct CrptApi {
    pub(super) validator: Arc<dyn DocumentValidator>,
    pub(super) rate_limiter: Arc<dyn RateLimiter>,
    pub(super) transport: Arc<dyn DocumentTransport>,
    pub(super) metrics: MetricsManager,
}
