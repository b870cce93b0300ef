// Standard library
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// 3rd party crates
use futures::{stream::FuturesUnordered, StreamExt};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

// Project imports
use crate::metrics::SubmissionMetrics;
use crate::models::Document;
use crate::providers::crpt::types::CrptApi;
use crate::settings::types::ConfigManager;

/// Reads a JSON encoded document from disk.
pub fn read_document(path: &Path) -> Result<Document, Box<dyn Error>> {
    let file: File = File::open(path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let document: Document = serde_json::from_reader(reader)?;
    Ok(document)
}

/// Submits every document concurrently through one rate limited client.
///
/// Documents still waiting for a request slot when `shutdown_rx` fires are
/// abandoned. Returns an error when any document was not accepted.
pub async fn run(
    config: Arc<ConfigManager>,
    document_paths: Vec<PathBuf>,
    shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let settings = config.get_settings().await;
    let api_config = settings.get_api();
    let rate_limit = settings.get_rate_limit();

    // Drop the settings lock
    drop(settings);

    info!(
        limit = rate_limit.limit(),
        window = ?rate_limit.window(),
        "Admission gate configured"
    );

    let client_token: Option<String> = api_config.client_token.clone();
    if client_token.is_none() {
        warn!("No client token configured, every submission will be refused");
    }

    let api: CrptApi = CrptApi::new(api_config, &rate_limit)?;

    let mut documents: Vec<(PathBuf, Document)> = Vec::with_capacity(document_paths.len());
    for path in document_paths {
        let document: Document = read_document(&path).map_err(|e| {
            error!(file = %path.display(), "Failed to read document: {}", e);
            e
        })?;
        debug!(file = %path.display(), "Document loaded");
        documents.push((path, document));
    }

    let mut futures = FuturesUnordered::new();
    for (path, document) in &documents {
        let shutdown = shutdown_rx.resubscribe();
        let api = &api;
        let token = client_token.as_deref();
        futures.push(async move {
            let result = api.introduce_product_until(document, token, shutdown).await;
            (path, result)
        });
    }

    let mut failed: usize = 0;
    while let Some((path, result)) = futures.next().await {
        match result {
            Ok(response) => {
                info!(
                    file = %path.display(),
                    report_id = %response.report_id,
                    "Document submitted"
                );
            }
            Err(e) => {
                failed += 1;
                error!(file = %path.display(), "Submission failed: {}", e);
            }
        }
    }

    let metrics: SubmissionMetrics = api.metrics().get_snapshot().await;
    info!(
        attempts = metrics.attempts,
        successes = metrics.successes,
        failures = metrics.failures,
        rejected = metrics.rejected_documents,
        "Submission summary"
    );

    if failed > 0 {
        return Err(format!("{} of {} documents were not submitted", failed, documents.len()).into());
    }

    Ok(())
}
