use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV interval tick
///
/// Immutable once fetched; uniquely identified by timestamp within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// A candle with its full set of derived indicator values
///
/// Only rows where every indicator is computable enter the enriched table;
/// there is no partial filling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCandle {
    #[serde(flatten)]
    pub candle: Candle,
    pub rsi_14: f64,
    pub bb_upper: f64,
    pub bb_lower: f64,
    pub atr: f64,
    pub sma_20: f64,
    pub atr_sma_50: f64,
    pub adx: f64,
}

impl EnrichedCandle {
    pub fn close(&self) -> f64 {
        self.candle.close
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.candle.timestamp
    }
}
