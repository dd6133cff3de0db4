//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::EvaluationSettings;
use crate::enrichment;
use crate::metrics::Metrics;
use crate::services::market_data::{
    AccountProvider, MarketDataProvider, PlaceholderAccountProvider, SentimentProvider,
};
use crate::signals::engine::SignalEngine;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub market_data: Arc<dyn MarketDataProvider>,
    pub account: Arc<dyn AccountProvider>,
    pub sentiment: Arc<dyn SentimentProvider>,
    pub settings: EvaluationSettings,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "bandpulse-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct SignalQuery {
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandlesQuery {
    symbol: Option<String>,
    limit: Option<usize>,
}

/// Evaluate the configured strategy against fresh candles
async fn get_signal(
    State(state): State<AppState>,
    Query(params): Query<SignalQuery>,
) -> Result<Json<Value>, StatusCode> {
    let symbol = params.symbol.unwrap_or_else(|| state.settings.symbol.clone());
    let start = Instant::now();

    let candles = state
        .market_data
        .get_candles(&symbol, &state.settings.interval, state.settings.candle_limit)
        .await
        .map_err(|e| {
            error!(symbol = %symbol, error = %e, "Failed to fetch candles for {}", symbol);
            state.metrics.provider_errors_total.inc();
            StatusCode::BAD_GATEWAY
        })?;

    let table = enrichment::enrich(&candles);
    let report = match SignalEngine::evaluate_latest(&table) {
        Some(report) => report,
        None => {
            // Valid outcome, not a fault: the feed has too little history
            return Ok(Json(json!({
                "symbol": symbol,
                "status": "insufficient_data",
                "candles_received": candles.len(),
                "candles_required": enrichment::MIN_CANDLES + 1,
            })));
        }
    };

    let actionable = report.is_actionable(state.settings.score_threshold);
    state.metrics.signal_evaluations_total.inc();
    if actionable {
        state.metrics.signal_evaluations_actionable.inc();
    }
    state
        .metrics
        .signal_evaluation_duration_seconds
        .observe(start.elapsed().as_secs_f64());

    let current = &table[table.len() - 1];
    info!(
        symbol = %symbol,
        signal = ?report.signal,
        score = report.score,
        actionable = actionable,
        "Evaluated {}: {:?} (score {})",
        symbol,
        report.signal,
        report.score
    );

    Ok(Json(json!({
        "symbol": symbol,
        "status": "ok",
        "price": current.close(),
        "signal": report.signal,
        "score": report.score,
        "threshold": state.settings.score_threshold,
        "actionable": actionable,
        "explanation": report.explanation(),
        "trace": report.trace,
        "indicators": {
            "rsi_14": current.rsi_14,
            "bb_upper": current.bb_upper,
            "bb_lower": current.bb_lower,
            "atr": current.atr,
            "sma_20": current.sma_20,
            "atr_sma_50": current.atr_sma_50,
            "adx": current.adx,
        },
    })))
}

/// Return the tail of the enriched table for external rendering
async fn get_candles(
    State(state): State<AppState>,
    Query(params): Query<CandlesQuery>,
) -> Result<Json<Value>, StatusCode> {
    let symbol = params.symbol.unwrap_or_else(|| state.settings.symbol.clone());
    let tail = params.limit.unwrap_or(10);

    let candles = state
        .market_data
        .get_candles(&symbol, &state.settings.interval, state.settings.candle_limit)
        .await
        .map_err(|e| {
            error!(symbol = %symbol, error = %e, "Failed to fetch candles for {}", symbol);
            state.metrics.provider_errors_total.inc();
            StatusCode::BAD_GATEWAY
        })?;

    let table = enrichment::enrich(&candles);
    let rows: Vec<_> = table.iter().rev().take(tail).cloned().collect();

    Ok(Json(json!({
        "symbol": symbol,
        "interval": state.settings.interval,
        "rows": rows,
    })))
}

async fn get_account(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let snapshot = state
        .account
        .get_account(&state.settings.symbol)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch account snapshot");
            state.metrics.provider_errors_total.inc();
            StatusCode::BAD_GATEWAY
        })?;
    Ok(Json(json!(snapshot)))
}

async fn get_sentiment(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let index = state.sentiment.get_index().await.map_err(|e| {
        error!(error = %e, "Failed to fetch sentiment index");
        state.metrics.provider_errors_total.inc();
        StatusCode::BAD_GATEWAY
    })?;
    Ok(Json(json!(index)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/signal", get(get_signal))
        .route("/api/candles", get(get_candles))
        .route("/api/account", get(get_account))
        .route("/api/sentiment", get(get_sentiment))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());
    let settings = EvaluationSettings::from_env();

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
        market_data: Arc::new(crate::services::binance::BinanceMarketDataProvider::new()),
        account: Arc::new(PlaceholderAccountProvider),
        sentiment: Arc::new(crate::services::sentiment::FearGreedClient::new()),
        settings,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
