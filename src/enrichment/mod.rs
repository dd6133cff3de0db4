//! Indicator enrichment
//!
//! Turns a raw candle series into the indicator-enriched table the scoring
//! engine consumes. Rows missing any derived value are dropped entirely, so
//! the table covers only the sub-range where every indicator is defined.

use crate::indicators::momentum::rsi;
use crate::indicators::trend::{adx, sma};
use crate::indicators::volatility::{atr, bollinger};
use crate::models::candle::{Candle, EnrichedCandle};

pub const RSI_PERIOD: usize = 14;
pub const BB_PERIOD: usize = 20;
pub const BB_STD_DEV: f64 = 2.0;
pub const ATR_PERIOD: usize = 14;
pub const SMA_PERIOD: usize = 20;
pub const ATR_SMA_PERIOD: usize = 50;
pub const ADX_PERIOD: usize = 14;

/// Candles required for the first enriched row
///
/// The ATR warm-up chained with the 50-period SMA over ATR is the longest
/// look-back; every other indicator is defined well before it.
pub const MIN_CANDLES: usize = ATR_PERIOD + ATR_SMA_PERIOD;

/// Compute the enriched table for an ordered candle series
///
/// Returns an empty table when fewer than `MIN_CANDLES` candles are supplied;
/// callers treat that as "no decision possible", not as a fault. Output
/// order matches input order, with one row per candle past the warm-up.
pub fn enrich(candles: &[Candle]) -> Vec<EnrichedCandle> {
    if candles.len() < MIN_CANDLES {
        return Vec::new();
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let rsi_values = rsi::rsi_series(&closes, RSI_PERIOD);
    let bands = bollinger::bollinger_series(&closes, BB_PERIOD, BB_STD_DEV);
    let atr_values = atr::atr_series(candles, ATR_PERIOD);
    let sma_values = sma::sma_series(&closes, SMA_PERIOD);
    let atr_sma_values = sma::sma_of_series(&atr_values, ATR_SMA_PERIOD);
    let adx_values = adx::adx_series(candles, ADX_PERIOD);

    let mut table = Vec::with_capacity(candles.len().saturating_sub(MIN_CANDLES - 1));
    for (i, candle) in candles.iter().enumerate() {
        let (Some(rsi_14), Some(band), Some(atr), Some(sma_20), Some(atr_sma_50), Some(adx)) = (
            rsi_values[i],
            bands[i],
            atr_values[i],
            sma_values[i],
            atr_sma_values[i],
            adx_values[i],
        ) else {
            continue;
        };

        table.push(EnrichedCandle {
            candle: candle.clone(),
            rsi_14,
            bb_upper: band.upper,
            bb_lower: band.lower,
            atr,
            sma_20,
            atr_sma_50,
            adx,
        });
    }

    table
}
