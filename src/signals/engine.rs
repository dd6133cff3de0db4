//! Signal scoring engine
//!
//! Maps the two most recent enriched rows into a (signal, score, trace)
//! triple via a fixed rule cascade: ADX trend gate, Bollinger band
//! breakout-and-reclaim base signal, then additive confirmation bonuses.
//! Pure and stateless; identical inputs always produce identical output.

use crate::models::candle::EnrichedCandle;
use crate::models::signal::{RuleId, Signal, SignalReport, TraceEntry};

/// ADX below this is treated as a trendless market and gates everything
pub const ADX_TREND_FLOOR: f64 = 20.0;
/// Score granted by a matched breakout-and-reclaim pattern
pub const BASE_SCORE: i32 = 50;
pub const TREND_BONUS: i32 = 20;
pub const VOLATILITY_BONUS: i32 = 15;
pub const RSI_BONUS: i32 = 15;
/// Tolerance factors widening the band-touch checks on the prior candle
pub const LOWER_BAND_TOLERANCE: f64 = 1.01;
pub const UPPER_BAND_TOLERANCE: f64 = 0.99;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// ATR must exceed this fraction of its 50-period average to count as expansion
pub const VOLATILITY_RATIO: f64 = 0.4;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate the last two rows of an enriched table
    ///
    /// Returns None when fewer than two rows are available; the engine is
    /// never invoked on an underfilled table.
    pub fn evaluate_latest(rows: &[EnrichedCandle]) -> Option<SignalReport> {
        if rows.len() < 2 {
            return None;
        }
        let previous = &rows[rows.len() - 2];
        let current = &rows[rows.len() - 1];
        Some(Self::evaluate(previous, current))
    }

    /// Evaluate two chronologically adjacent enriched rows
    pub fn evaluate(previous: &EnrichedCandle, current: &EnrichedCandle) -> SignalReport {
        // Hard gate: no directional strength, no signal
        if current.adx < ADX_TREND_FLOOR {
            let entry = TraceEntry::new(
                RuleId::AdxGate,
                0,
                format!("ADX filter: {:.2} < 20, signal ignored", current.adx),
            );
            return SignalReport::new(Signal::Hold, 0, vec![entry]);
        }

        // Base signal: breakout on the prior candle, reclaim on the current.
        // Long takes priority per rule order; boundary values are inclusive.
        let long_base = previous.close() <= previous.bb_lower * LOWER_BAND_TOLERANCE
            && current.close() > current.bb_lower;
        let short_base = previous.close() >= previous.bb_upper * UPPER_BAND_TOLERANCE
            && current.close() < current.bb_upper;

        let (signal, base_entry) = if long_base {
            (
                Signal::Long,
                TraceEntry::new(
                    RuleId::LowerBandReclaim,
                    BASE_SCORE,
                    format!("Base signal: lower band reclaim (long): +{}", BASE_SCORE),
                ),
            )
        } else if short_base {
            (
                Signal::Short,
                TraceEntry::new(
                    RuleId::UpperBandReclaim,
                    BASE_SCORE,
                    format!("Base signal: upper band reclaim (short): +{}", BASE_SCORE),
                ),
            )
        } else {
            let entry = TraceEntry::new(
                RuleId::NoBollingerPattern,
                0,
                "Bollinger Bands condition not met".to_string(),
            );
            return SignalReport::new(Signal::Hold, 0, vec![entry]);
        };

        let mut score = BASE_SCORE;
        let mut trace = vec![base_entry];

        // Confirmation bonuses: independent, additive, fixed order
        let trend_confirmed = match signal {
            Signal::Long => current.close() > current.sma_20,
            Signal::Short => current.close() < current.sma_20,
            Signal::Hold => false,
        };
        if trend_confirmed {
            score += TREND_BONUS;
            trace.push(TraceEntry::new(
                RuleId::TrendConfirmation,
                TREND_BONUS,
                format!("Trend confirmation (SMA 20): +{}", TREND_BONUS),
            ));
        }

        if current.atr > current.atr_sma_50 * VOLATILITY_RATIO {
            score += VOLATILITY_BONUS;
            trace.push(TraceEntry::new(
                RuleId::VolatilityExpansion,
                VOLATILITY_BONUS,
                format!("Volatility expansion (ATR): +{}", VOLATILITY_BONUS),
            ));
        }

        match signal {
            Signal::Long if current.rsi_14 < RSI_OVERSOLD => {
                score += RSI_BONUS;
                trace.push(TraceEntry::new(
                    RuleId::OversoldConfirmation,
                    RSI_BONUS,
                    format!("Oversold confirmation (RSI): +{}", RSI_BONUS),
                ));
            }
            Signal::Short if current.rsi_14 > RSI_OVERBOUGHT => {
                score += RSI_BONUS;
                trace.push(TraceEntry::new(
                    RuleId::OverboughtConfirmation,
                    RSI_BONUS,
                    format!("Overbought confirmation (RSI): +{}", RSI_BONUS),
                ));
            }
            _ => {}
        }

        SignalReport::new(signal, score, trace)
    }
}
