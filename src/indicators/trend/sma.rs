//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate the SMA series over a value series
///
/// Defined from index `period - 1`.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    math::rolling_mean(values, period)
}

/// Calculate the SMA series over another indicator's output
///
/// Windows overlapping the inner indicator's warm-up stay undefined, so the
/// compound warm-up is the sum of both windows.
pub fn sma_of_series(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    math::rolling_mean_opt(values, period)
}
