//! Binance REST market data provider implementation

use crate::models::candle::Candle;
use crate::services::binance::messages::{self, TickerPrice};
use crate::services::market_data::{MarketDataProvider, ProviderError};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.binance.com";
const MAX_RETRIES: usize = 3;

pub struct BinanceMarketDataProvider {
    http: reqwest::Client,
    base_url: String,
}

impl BinanceMarketDataProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a JSON payload with exponential backoff
    ///
    /// Retry policy lives here, not in the core: a transient exchange error
    /// must never surface as a scoring failure.
    async fn get_json(&self, url: &str) -> Result<Value, ProviderError> {
        let request = || async {
            let response = self.http.get(url).send().await?;
            response.error_for_status()?.json::<Value>().await
        };

        let payload = request
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(250))
                    .with_max_times(MAX_RETRIES),
            )
            .notify(|err: &reqwest::Error, dur: Duration| {
                warn!(error = %err, backoff_ms = dur.as_millis(), "Binance request failed, retrying");
            })
            .await?;

        Ok(payload)
    }
}

impl Default for BinanceMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for BinanceMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url, symbol, interval, limit
        );
        let payload = self.get_json(&url).await?;
        let candles = messages::parse_klines(&payload)?;

        debug!(
            symbol = %symbol,
            interval = %interval,
            count = candles.len(),
            "Fetched {} candles for {}",
            candles.len(),
            symbol
        );
        Ok(candles)
    }

    async fn get_latest_price(&self, symbol: &str) -> Result<f64, ProviderError> {
        let url = format!("{}/api/v3/ticker/price?symbol={}", self.base_url, symbol);
        let payload = self.get_json(&url).await?;
        let ticker: TickerPrice = serde_json::from_value(payload)
            .map_err(|e| ProviderError::Malformed(format!("invalid ticker payload: {}", e)))?;
        ticker.price.parse::<f64>().map_err(|e| {
            ProviderError::Malformed(format!("invalid price '{}': {}", ticker.price, e))
        })
    }
}
