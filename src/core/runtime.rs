//! Periodic evaluation loop for the worker process

use crate::config::EvaluationSettings;
use crate::enrichment;
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::SignalEngine;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Runs one fetch-enrich-score cycle per tick
///
/// Each cycle is independent; nothing carries over between evaluations
/// beyond metrics counters.
pub struct EvaluationLoop {
    provider: Arc<dyn MarketDataProvider>,
    settings: EvaluationSettings,
    metrics: Arc<Metrics>,
    interval_seconds: u64,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl EvaluationLoop {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        settings: EvaluationSettings,
        metrics: Arc<Metrics>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Evaluation loop disabled: interval_seconds is 0".into());
        }
        Ok(Self {
            provider,
            settings,
            metrics,
            interval_seconds,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the loop
    pub async fn start(&self) {
        let provider = self.provider.clone();
        let settings = self.settings.clone();
        let metrics = self.metrics.clone();
        let interval_seconds = self.interval_seconds;
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval(tokio::time::Duration::from_secs(interval_seconds));
            info!(
                symbol = %settings.symbol,
                interval = %settings.interval,
                every_seconds = interval_seconds,
                "EvaluationLoop: started for {} ({} candles, every {}s)",
                settings.symbol,
                settings.candle_limit,
                interval_seconds
            );

            loop {
                ticker.tick().await;
                let start = Instant::now();

                let candles = match provider
                    .get_candles(&settings.symbol, &settings.interval, settings.candle_limit)
                    .await
                {
                    Ok(candles) => candles,
                    Err(e) => {
                        metrics.provider_errors_total.inc();
                        error!(
                            symbol = %settings.symbol,
                            error = %e,
                            "EvaluationLoop: candle fetch failed for {}",
                            settings.symbol
                        );
                        continue;
                    }
                };

                let table = enrichment::enrich(&candles);
                let Some(report) = SignalEngine::evaluate_latest(&table) else {
                    warn!(
                        symbol = %settings.symbol,
                        candles = candles.len(),
                        required = enrichment::MIN_CANDLES + 1,
                        "EvaluationLoop: insufficient history for {} ({} < {})",
                        settings.symbol,
                        candles.len(),
                        enrichment::MIN_CANDLES + 1
                    );
                    continue;
                };

                metrics.signal_evaluations_total.inc();
                metrics
                    .signal_evaluation_duration_seconds
                    .observe(start.elapsed().as_secs_f64());

                if report.is_actionable(settings.score_threshold) {
                    metrics.signal_evaluations_actionable.inc();
                    info!(
                        symbol = %settings.symbol,
                        signal = ?report.signal,
                        score = report.score,
                        threshold = settings.score_threshold,
                        "EvaluationLoop: actionable {:?} for {} (score {} >= {})\n{}",
                        report.signal,
                        settings.symbol,
                        report.score,
                        settings.score_threshold,
                        report.explanation()
                    );
                } else {
                    debug!(
                        symbol = %settings.symbol,
                        signal = ?report.signal,
                        score = report.score,
                        "EvaluationLoop: {:?} for {} (score {})",
                        report.signal,
                        settings.symbol,
                        report.score
                    );
                }
            }
        });

        let mut h = handle_arc.write().await;
        *h = Some(handle);
    }

    /// Stop the loop
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("EvaluationLoop: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
