//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::candle::Candle;

/// Calculate the ATR series
///
/// True range needs a previous close, so the TR series starts at the second
/// candle; Wilder smoothing over `period` puts the first ATR at candle index
/// `period`.
pub fn atr_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; candles.len()];
    if period == 0 || candles.len() < period + 1 {
        return out;
    }

    let mut tr_values = Vec::with_capacity(candles.len() - 1);
    for i in 1..candles.len() {
        tr_values.push(math::true_range(
            candles[i].high,
            candles[i].low,
            candles[i - 1].close,
        ));
    }

    let smoothed = math::wilder_smooth(&tr_values, period);
    for i in period..candles.len() {
        out[i] = smoothed[i - 1];
    }

    out
}
