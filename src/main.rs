// Standard library
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

// 3rd party crates
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

// Project imports
use crpt_introduce::functions::run;
use crpt_introduce::settings::types::ConfigManager;

/// Targets whose chatter is capped at error level.
const NOISY_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

/// Submits the JSON documents named on the command line.
///
/// Every document goes through validation and the shared admission gate
/// before it is posted; Ctrl+C abandons documents still waiting for a slot.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let document_paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if document_paths.is_empty() {
        eprintln!("usage: crpt-introduce <document.json>...");
        return ExitCode::FAILURE;
    }

    let config: Arc<ConfigManager> = match ConfigManager::new().await {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let log_level: String = config.get_log_level().await;

    let mut filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level);
    for target in NOISY_TARGETS {
        if let Ok(directive) = format!("{}=error", target).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("Settings have been loaded from {:?}", config.config_path);

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, abandoning queued documents...");
        let _ = shutdown_tx.send(());
    });

    match run(config, document_paths, shutdown_rx).await {
        Ok(()) => {
            info!("All documents submitted.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}
