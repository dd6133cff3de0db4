//! Prometheus metrics for the HTTP surface and evaluation cycles

use prometheus::{Counter, Encoder, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: Counter,
    pub http_requests_in_flight: Gauge,
    pub http_request_duration_seconds: Histogram,
    pub signal_evaluations_total: Counter,
    pub signal_evaluations_actionable: Counter,
    pub signal_evaluation_duration_seconds: Histogram,
    pub provider_errors_total: Counter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = Counter::with_opts(Opts::new(
            "http_requests_total",
            "Total HTTP requests handled",
        ))?;
        let http_requests_in_flight = Gauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being processed",
        ))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;
        let signal_evaluations_total = Counter::with_opts(Opts::new(
            "signal_evaluations_total",
            "Completed signal evaluations",
        ))?;
        let signal_evaluations_actionable = Counter::with_opts(Opts::new(
            "signal_evaluations_actionable",
            "Evaluations whose score cleared the threshold",
        ))?;
        let signal_evaluation_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "signal_evaluation_duration_seconds",
            "Fetch-enrich-score cycle latency",
        ))?;
        let provider_errors_total = Counter::with_opts(Opts::new(
            "provider_errors_total",
            "Errors returned by external data providers",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(signal_evaluations_total.clone()))?;
        registry.register(Box::new(signal_evaluations_actionable.clone()))?;
        registry.register(Box::new(signal_evaluation_duration_seconds.clone()))?;
        registry.register(Box::new(provider_errors_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            signal_evaluations_total,
            signal_evaluations_actionable,
            signal_evaluation_duration_seconds,
            provider_errors_total,
        })
    }

    /// Export all registered metrics in Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&families, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("metrics encoding error: {}", e)))
    }
}
