//! Environment-based configuration helpers

use std::env;

/// Current deployment environment, defaulting to sandbox
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// HTTP port for the API server
pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// Parameters of one evaluation cycle
///
/// The score threshold is external policy: the engine never applies it,
/// callers compare the reported score against it.
#[derive(Debug, Clone)]
pub struct EvaluationSettings {
    pub symbol: String,
    pub interval: String,
    pub candle_limit: usize,
    pub score_threshold: i32,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            symbol: "BTCUSDT".to_string(),
            interval: "4h".to_string(),
            candle_limit: 100,
            score_threshold: 60,
        }
    }
}

impl EvaluationSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            symbol: env::var("SYMBOL").unwrap_or(defaults.symbol),
            interval: env::var("INTERVAL").unwrap_or(defaults.interval),
            candle_limit: env::var("CANDLE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.candle_limit),
            score_threshold: env::var("SCORE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.score_threshold),
        }
    }
}
