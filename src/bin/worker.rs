//! Bandpulse Worker
//!
//! Periodically fetches candles, enriches them and scores the configured
//! symbol. Can be run as a separate process/instance from the API server.

use bandpulse::config::{self, EvaluationSettings};
use bandpulse::core::runtime::EvaluationLoop;
use bandpulse::logging;
use bandpulse::metrics::Metrics;
use bandpulse::services::binance::BinanceMarketDataProvider;
use bandpulse::services::market_data::MarketDataProvider;
use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let eval_interval: u64 = env::var("EVAL_INTERVAL_SECONDS")
        .ok()
        .and_then(|i| i.parse().ok())
        .unwrap_or(60);

    let environment = config::get_environment();
    let settings = EvaluationSettings::from_env();
    info!("Starting Bandpulse Worker");
    info!(environment = %environment, "Environment");
    info!(
        symbol = %settings.symbol,
        interval = %settings.interval,
        threshold = settings.score_threshold,
        "Evaluating {} on {} candles, threshold {}",
        settings.symbol,
        settings.interval,
        settings.score_threshold
    );

    let metrics = Arc::new(Metrics::new()?);
    let provider: Arc<dyn MarketDataProvider> = Arc::new(BinanceMarketDataProvider::new());

    let eval_loop = EvaluationLoop::new(provider, settings, metrics, eval_interval)
        .map_err(|e| format!("Failed to create evaluation loop: {}", e))?;
    eval_loop.start().await;

    info!("Worker started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down worker...");
            eval_loop.stop().await;
            info!("Worker stopped");
        }
    }

    Ok(())
}
