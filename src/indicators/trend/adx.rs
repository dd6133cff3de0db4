//! ADX (Average Directional Index) indicator
//!
//! ADX measures trend strength regardless of direction.
//! Requires calculation of +DI and -DI first.

use crate::common::math;
use crate::models::candle::Candle;

/// Calculate the ADX series
///
/// True range and directional movement are Wilder-smoothed over `period` to
/// form +DI/-DI, the DX series is derived from their spread, and ADX is a
/// second Wilder smoothing of DX. First value at index `2 * period - 1`.
pub fn adx_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; candles.len()];
    if period == 0 || candles.len() < 2 * period {
        return out;
    }

    let mut tr_values = Vec::with_capacity(candles.len() - 1);
    let mut plus_dm_values = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm_values = Vec::with_capacity(candles.len() - 1);

    for i in 1..candles.len() {
        tr_values.push(math::true_range(
            candles[i].high,
            candles[i].low,
            candles[i - 1].close,
        ));

        let up_move = candles[i].high - candles[i - 1].high;
        let down_move = candles[i - 1].low - candles[i].low;
        plus_dm_values.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm_values.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    let smoothed_tr = math::wilder_smooth(&tr_values, period);
    let smoothed_plus = math::wilder_smooth(&plus_dm_values, period);
    let smoothed_minus = math::wilder_smooth(&minus_dm_values, period);

    // DX series shares the delta-series indexing (offset by one candle)
    let mut dx_values = Vec::new();
    for i in (period - 1)..tr_values.len() {
        let (Some(tr), Some(plus), Some(minus)) =
            (smoothed_tr[i], smoothed_plus[i], smoothed_minus[i])
        else {
            continue;
        };

        let plus_di = if tr > 0.0 { 100.0 * (plus / tr) } else { 0.0 };
        let minus_di = if tr > 0.0 { 100.0 * (minus / tr) } else { 0.0 };

        let di_sum = plus_di + minus_di;
        let dx = if di_sum > 0.0 {
            100.0 * ((plus_di - minus_di).abs() / di_sum)
        } else {
            0.0
        };
        dx_values.push(dx);
    }

    let smoothed_dx = math::wilder_smooth(&dx_values, period);
    for (j, value) in smoothed_dx.into_iter().enumerate() {
        // DX j=0 sits at candle index `period`; ADX warm-up adds another period
        let candle_index = period + j;
        if candle_index < out.len() {
            out[candle_index] = value;
        }
    }

    out
}
