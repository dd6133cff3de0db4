//! Shared math helpers for rolling-window indicator calculations

/// Arithmetic mean of a slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (ddof = 0)
///
/// Matches the Bollinger Band convention of the reference indicator set.
pub fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// True range for a single candle given the previous close
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Rolling mean over a fixed window
///
/// Output is aligned with the input; positions without a full window are None.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period - 1)..values.len() {
        out[i] = Some(mean(&values[i + 1 - period..=i]));
    }
    out
}

/// Rolling mean over a series with warm-up gaps
///
/// A window contributes only when every entry in it is defined, so the
/// warm-up of an inner indicator propagates to the outer average.
pub fn rolling_mean_opt(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        if window.iter().all(|v| v.is_some()) {
            let sum: f64 = window.iter().map(|v| v.unwrap_or(0.0)).sum();
            out[i] = Some(sum / period as f64);
        }
    }
    out
}

/// Wilder smoothing of a series
///
/// The first smoothed value is the plain mean of the first `period` entries;
/// subsequent values follow `prev + (x - prev) / period`. Output is aligned
/// with the input, None during warm-up.
pub fn wilder_smooth(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let mut smoothed = mean(&values[..period]);
    out[period - 1] = Some(smoothed);
    for i in period..values.len() {
        smoothed += (values[i] - smoothed) / period as f64;
        out[i] = Some(smoothed);
    }
    out
}
