//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (std_dev * standard deviation)
//! Lower Band = Middle - (std_dev * standard deviation)

use crate::common::math;

/// Upper and lower band values for one position in the series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub lower: f64,
}

/// Calculate the Bollinger Band series over close prices
///
/// Uses the population standard deviation of the same rolling window as the
/// moving average. Defined from index `period - 1`.
pub fn bollinger_series(closes: &[f64], period: usize, std_dev: f64) -> Vec<Option<BollingerBands>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return out;
    }

    for i in (period - 1)..closes.len() {
        let window = &closes[i + 1 - period..=i];
        let middle = math::mean(window);
        let std = math::stddev(window);
        out[i] = Some(BollingerBands {
            upper: middle + std_dev * std,
            lower: middle - std_dev * std,
        });
    }

    out
}
