//! Fear & Greed sentiment index client (alternative.me)

use crate::models::account::SentimentIndex;
use crate::services::market_data::{ProviderError, SentimentProvider};
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.alternative.me";

#[derive(Debug, Deserialize)]
struct FngResponse {
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
    value_classification: String,
}

pub struct FearGreedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FearGreedClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for FearGreedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentProvider for FearGreedClient {
    async fn get_index(&self) -> Result<SentimentIndex, ProviderError> {
        let url = format!("{}/fng/?limit=1", self.base_url);
        let response: FngResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entry = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Malformed("empty fng data array".to_string()))?;
        let value = entry
            .value
            .parse::<i64>()
            .map_err(|e| ProviderError::Malformed(format!("invalid fng value: {}", e)))?;

        Ok(SentimentIndex {
            value,
            classification: entry.value_classification,
        })
    }
}
