//! Performance Server - Student performance prediction service
//!
//! Trains an ordinary-least-squares model once at startup from a CSV
//! dataset (or a deterministic synthetic fallback) and serves score and
//! grade predictions over HTTP.

use anyhow::Result;
use predictor_lib::{
    dataset, trainer, DatasetSource, GradePredictor, ServiceMetrics, StructuredLogger,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting performance-server");

    // Load configuration
    let config = config::ServerConfig::load()?;
    info!(dataset_path = %config.dataset_path, "Server configured");

    // Initialize metrics and structured logger
    let metrics = ServiceMetrics::new();
    let logger = StructuredLogger::new("performance-server");
    logger.log_startup(SERVER_VERSION);

    // Train synchronously before the listener binds. A failure leaves the
    // service up but permanently untrained: predictions fail fast until
    // the process is restarted.
    let (predictor, dataset_source) =
        build_predictor(Path::new(&config.dataset_path), &metrics, &logger);

    // Create shared application state
    let app_state = Arc::new(api::AppState {
        predictor,
        dataset_source,
        metrics,
        logger: logger.clone(),
    });

    // Start the API server
    let api_handle = tokio::spawn(api::serve(config.api_port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    logger.log_shutdown("SIGINT received");
    info!("Shutting down");
    api_handle.abort();

    Ok(())
}

/// Run the one startup training attempt and fold the outcome into an
/// explicit predictor state
fn build_predictor(
    dataset_path: &Path,
    metrics: &ServiceMetrics,
    logger: &StructuredLogger,
) -> (GradePredictor, DatasetSource) {
    let (records, source) = match dataset::load_or_generate(dataset_path) {
        Ok(pair) => pair,
        Err(err) => {
            logger.log_training_failed(&err.to_string());
            return (
                GradePredictor::untrained(err.to_string()),
                DatasetSource::File(dataset_path.to_path_buf()),
            );
        }
    };

    match trainer::fit(&records) {
        Ok(model) => {
            metrics.set_model_trained(&model.report, &source);
            logger.log_training_complete(&model.report, &source);
            (GradePredictor::trained(model), source)
        }
        Err(err) => {
            logger.log_training_failed(&err.to_string());
            (GradePredictor::untrained(err.to_string()), source)
        }
    }
}
