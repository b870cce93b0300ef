// Standard library
use std::sync::Arc;
use std::time::Instant;

// 3rd party crates
use tokio::sync::RwLock;

/// Counters for document submissions
#[derive(Debug, Default, Clone)]
pub struct SubmissionMetrics {
    /// Documents that passed validation and went on to wait for a slot
    pub attempts: u64,
    /// Documents accepted by the remote side
    pub successes: u64,
    /// Submissions that failed while waiting for a slot or on the wire
    pub failures: u64,
    /// Documents rejected by validation
    pub rejected_documents: u64,
    /// Calls made without a client token
    pub missing_tokens: u64,
    /// Last successful submission time
    pub last_success: Option<Instant>,
    /// Last failed submission time
    pub last_failure: Option<Instant>,
    /// Report id of the last accepted document
    pub last_report_id: Option<String>,
}

/// Thread-safe metrics manager
#[derive(Debug, Default)]
pub struct MetricsManager {
    metrics: Arc<RwLock<SubmissionMetrics>>,
}

impl MetricsManager {
    /// Creates a new MetricsManager
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(RwLock::new(SubmissionMetrics::default())),
        }
    }

    /// Records a document that is about to be sent
    pub async fn record_attempt(&self) {
        self.metrics.write().await.attempts += 1;
    }

    /// Records an accepted document
    pub async fn record_success(&self, report_id: String) {
        let mut metrics = self.metrics.write().await;
        metrics.successes += 1;
        metrics.last_success = Some(Instant::now());
        metrics.last_report_id = Some(report_id);
    }

    /// Records a failed submission
    pub async fn record_failure(&self) {
        let mut metrics = self.metrics.write().await;
        metrics.failures += 1;
        metrics.last_failure = Some(Instant::now());
    }

    pub async fn record_rejected(&self) {
        self.metrics.write().await.rejected_documents += 1;
    }

    pub async fn record_missing_token(&self) {
        self.metrics.write().await.missing_tokens += 1;
    }

    /// Gets a snapshot of the current metrics
    pub async fn get_snapshot(&self) -> SubmissionMetrics {
        (*self.metrics.read().await).clone()
    }
}
