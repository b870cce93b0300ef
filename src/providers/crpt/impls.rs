// Standard library
use std::sync::Arc;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

// Project imports
use crate::metrics::MetricsManager;
use crate::models::{Document, IntroduceResponse};
use crate::providers::{DocumentTransport, TransportError};
use crate::utility::rate_limiter::{AdmissionGate, RateLimitConfig, RateLimiter};
use crate::validation::{DocumentValidator, Validator};

// Current module imports
use super::errors::{ApiError, CrptError, CrptValidationError};
use super::functions::{create_reqwest_client, send_document};
use super::types::{CrptApi, CrptConfig, HttpTransport};

impl CrptConfig {
    pub fn validate(&self) -> Result<(), CrptValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(CrptValidationError::MissingBaseUrl);
        }

        if Url::parse(&self.base_url).is_err() {
            return Err(CrptValidationError::InvalidBaseUrl(self.base_url.clone()));
        }

        if self.oms_id.trim().is_empty() {
            return Err(CrptValidationError::MissingOmsId);
        }

        if self.user_name.trim().is_empty() {
            return Err(CrptValidationError::MissingUserName);
        }

        if self.timeout_secs == 0 {
            return Err(CrptValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl HttpTransport {
    pub fn new(config: CrptConfig) -> Result<Self, CrptError> {
        config.validate()?;
        let client = create_reqwest_client(&config)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl DocumentTransport for HttpTransport {
    async fn send(
        &self,
        document: &Document,
        client_token: &str,
    ) -> Result<IntroduceResponse, TransportError> {
        send_document(self, document, client_token).await
    }
}

impl CrptApi {
    /// Builds a client with the default validator, an admission gate and an
    /// HTTP transport.
    pub fn new(config: CrptConfig, rate_limit: &RateLimitConfig) -> Result<Self, CrptError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::from_parts(
            Arc::new(Validator::new()),
            Arc::new(AdmissionGate::new(rate_limit)),
            Arc::new(transport),
        ))
    }

    pub fn from_parts(
        validator: Arc<dyn DocumentValidator>,
        rate_limiter: Arc<dyn RateLimiter>,
        transport: Arc<dyn DocumentTransport>,
    ) -> Self {
        Self {
            validator,
            rate_limiter,
            transport,
            metrics: MetricsManager::new(),
        }
    }

    /// Validates and sends a document, waiting for a free request slot first.
    ///
    /// # Errors
    ///
    /// * `ApiError::InvalidDocument` - validation rejected the document; no slot is used
    /// * `ApiError::MissingToken` - `client_token` is `None`; no slot is used
    /// * `ApiError::SubmissionFailed` - anything that went wrong afterwards
    pub async fn introduce_product(
        &self,
        document: &Document,
        client_token: Option<&str>,
    ) -> Result<IntroduceResponse, ApiError> {
        self.submit(document, client_token, None).await
    }

    /// Same as [`CrptApi::introduce_product`], but gives up waiting for a
    /// slot once `shutdown` fires.
    pub async fn introduce_product_until(
        &self,
        document: &Document,
        client_token: Option<&str>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<IntroduceResponse, ApiError> {
        self.submit(document, client_token, Some(shutdown)).await
    }

    pub fn metrics(&self) -> &MetricsManager {
        &self.metrics
    }

    async fn submit(
        &self,
        document: &Document,
        client_token: Option<&str>,
        shutdown: Option<broadcast::Receiver<()>>,
    ) -> Result<IntroduceResponse, ApiError> {
        if !self.validator.is_valid(document) {
            warn!(doc_type = ?document.doc_type, "Document rejected by validation");
            self.metrics.record_rejected().await;
            return Err(ApiError::InvalidDocument);
        }

        let Some(client_token) = client_token else {
            warn!("Client token is missing");
            self.metrics.record_missing_token().await;
            return Err(ApiError::MissingToken);
        };

        self.metrics.record_attempt().await;

        let outcome: Result<IntroduceResponse, String> =
            match self.rate_limiter.acquire(shutdown).await {
                Ok(()) => self
                    .transport
                    .send(document, client_token)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

        match outcome {
            Ok(response) => {
                info!(
                    oms_id = %response.oms_id,
                    report_id = %response.report_id,
                    "Document accepted"
                );
                self.metrics.record_success(response.report_id.clone()).await;
                Ok(response)
            }
            Err(reason) => {
                error!(
                    doc_type = ?document.doc_type,
                    participant_inn = ?document.participant_inn,
                    "Document was not sent: {}",
                    reason
                );
                self.metrics.record_failure().await;
                Err(ApiError::SubmissionFailed {
                    document: Box::new(document.clone()),
                    reason,
                })
            }
        }
    }
}
