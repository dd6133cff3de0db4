//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and the signal surface
//! against stubbed providers.


use serde_json::Value;
use std::sync::Arc;

use test_utils::{flat_feed, BrokenFeed, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "bandpulse-signal-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn metrics_endpoint_tracks_request_count() {
    let app = TestApiServer::new().await;

    for _ in 0..3 {
        let _ = app.server.get("/health").await;
    }

    assert!(app.metrics.http_requests_total.get() >= 3.0);
}

#[tokio::test]
async fn signal_endpoint_evaluates_the_feed() {
    // A flat feed has zero directional movement, so the trend-strength
    // gate fires and the evaluation is fully deterministic
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/signal").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["symbol"], "BTCUSDT");
    assert_eq!(body["signal"], "hold");
    assert_eq!(body["score"], 0);
    assert_eq!(body["threshold"], 60);
    assert_eq!(body["actionable"], false);
    assert_eq!(body["explanation"], "ADX filter: 0.00 < 20, signal ignored");
    assert_eq!(body["price"], 100.0);
    assert!(body["trace"].as_array().is_some_and(|t| !t.is_empty()));
    assert!(body["indicators"]["rsi_14"].as_f64().is_some());
    assert!(body["indicators"]["adx"].as_f64().is_some());
}

#[tokio::test]
async fn signal_endpoint_accepts_a_symbol_override() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/signal?symbol=ETHUSDT").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "ETHUSDT");
}

#[tokio::test]
async fn signal_endpoint_reports_insufficient_history() {
    let app = TestApiServer::with_feed(flat_feed(10)).await;
    let response = app.server.get("/api/signal").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "insufficient_data");
    assert_eq!(body["candles_received"], 10);
    assert_eq!(body["candles_required"], 65);
}

#[tokio::test]
async fn signal_endpoint_surfaces_provider_outages() {
    let app = TestApiServer::with_market_data(Arc::new(BrokenFeed)).await;
    let response = app.server.get("/api/signal").await;
    assert_eq!(response.status_code(), 502);
    assert!(app.metrics.provider_errors_total.get() >= 1.0);
}

#[tokio::test]
async fn candles_endpoint_returns_the_enriched_tail() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/candles?limit=5").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "BTCUSDT");
    assert_eq!(body["interval"], "4h");
    let rows = body["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert!(row["close"].as_f64().is_some());
        assert!(row["rsi_14"].as_f64().is_some());
        assert!(row["bb_upper"].as_f64().is_some());
        assert!(row["atr_sma_50"].as_f64().is_some());
    }
}

#[tokio::test]
async fn account_endpoint_returns_the_snapshot() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/account").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["total_balance"], 10_000.0);
    assert_eq!(body["position_amt"], 0.5);
    assert_eq!(body["pnl_percent"], 1.0);
}

#[tokio::test]
async fn sentiment_endpoint_returns_the_index() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/sentiment").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["value"], 72);
    assert_eq!(body["classification"], "Greed");
}

#[tokio::test]
async fn api_server_is_stateless() {
    let app = TestApiServer::new().await;

    let response1 = app.server.get("/api/signal").await;
    let response2 = app.server.get("/api/signal").await;

    let body1: Value = response1.json();
    let body2: Value = response2.json();
    assert_eq!(body1["score"], body2["score"]);
    assert_eq!(body1["signal"], body2["signal"]);
}
