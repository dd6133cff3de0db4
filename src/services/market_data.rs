//! Provider interfaces for external data sources
//!
//! The core never performs I/O itself; these traits are the seams where the
//! candle feed, the account snapshot and the sentiment index come in. All of
//! them are consumed read-only; only candles reach the scoring engine.

use crate::models::account::{AccountSnapshot, SentimentIndex};
use crate::models::candle::Candle;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get historical candles for a symbol, oldest first
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError>;

    /// Get the latest price for a symbol
    async fn get_latest_price(&self, symbol: &str) -> Result<f64, ProviderError>;
}

#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// Get balance, position and PnL for a symbol (display only)
    async fn get_account(&self, symbol: &str) -> Result<AccountSnapshot, ProviderError>;
}

#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Get the current sentiment index (informational only)
    async fn get_index(&self) -> Result<SentimentIndex, ProviderError>;
}

/// Account provider reporting an empty account
///
/// Authenticated exchange endpoints stay outside this service; deployments
/// without credentials run with this stand-in.
pub struct PlaceholderAccountProvider;

#[async_trait]
impl AccountProvider for PlaceholderAccountProvider {
    async fn get_account(&self, _symbol: &str) -> Result<AccountSnapshot, ProviderError> {
        Ok(AccountSnapshot::flat(0.0))
    }
}
