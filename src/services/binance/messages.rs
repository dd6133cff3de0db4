//! Binance REST payload parsing
//!
//! Klines arrive as heterogeneous JSON arrays with prices encoded as
//! strings: [openTime, "open", "high", "low", "close", "volume", ...].
//! Malformed rows are a data-provider fault and surface as errors before
//! the candles reach the core.

use crate::models::candle::Candle;
use crate::services::market_data::ProviderError;
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;

/// Response of the ticker price endpoint
#[derive(Debug, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    pub price: String,
}

/// Parse one kline row into a candle
pub fn parse_kline(row: &[Value]) -> Result<Candle, ProviderError> {
    if row.len() < 6 {
        return Err(ProviderError::Malformed(format!(
            "kline row has {} fields, expected at least 6",
            row.len()
        )));
    }

    let open_time = row[0].as_i64().ok_or_else(|| {
        ProviderError::Malformed("kline open time is not an integer".to_string())
    })?;
    let timestamp = DateTime::from_timestamp_millis(open_time).ok_or_else(|| {
        ProviderError::Malformed(format!("kline open time out of range: {}", open_time))
    })?;

    let open = price_field(row, 1, "open")?;
    let high = price_field(row, 2, "high")?;
    let low = price_field(row, 3, "low")?;
    let close = price_field(row, 4, "close")?;
    let volume = price_field(row, 5, "volume")?;

    Ok(Candle::new(open, high, low, close, volume, timestamp))
}

/// Parse a full klines response, preserving exchange order (oldest first)
pub fn parse_klines(payload: &Value) -> Result<Vec<Candle>, ProviderError> {
    let rows = payload
        .as_array()
        .ok_or_else(|| ProviderError::Malformed("klines payload is not an array".to_string()))?;

    rows.iter()
        .map(|row| {
            let fields = row.as_array().ok_or_else(|| {
                ProviderError::Malformed("kline row is not an array".to_string())
            })?;
            parse_kline(fields)
        })
        .collect()
}

fn price_field(row: &[Value], index: usize, name: &str) -> Result<f64, ProviderError> {
    let text = row[index]
        .as_str()
        .ok_or_else(|| ProviderError::Malformed(format!("kline {} is not a string", name)))?;
    text.parse::<f64>()
        .map_err(|e| ProviderError::Malformed(format!("invalid {} price '{}': {}", name, text, e)))
}
