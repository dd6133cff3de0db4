//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss, Wilder-smoothed

use crate::common::math;

/// Calculate the RSI series over close prices
///
/// Gains and losses are Wilder-smoothed over `period`, so the first value
/// appears at index `period` (one delta per candle after the first).
/// A window with zero average loss yields 100.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gains = math::wilder_smooth(&gains, period);
    let avg_losses = math::wilder_smooth(&losses, period);

    for i in period..closes.len() {
        // Delta series is offset by one from the candle series
        if let (Some(avg_gain), Some(avg_loss)) = (avg_gains[i - 1], avg_losses[i - 1]) {
            out[i] = Some(if avg_loss == 0.0 {
                100.0
            } else {
                let rs = avg_gain / avg_loss;
                100.0 - (100.0 / (1.0 + rs))
            });
        }
    }

    out
}
