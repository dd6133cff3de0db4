//! Unit tests for the ADX series

use bandpulse::indicators::trend::adx::adx_series;
use bandpulse::models::candle::Candle;
use chrono::{Duration, Utc};

const EPS: f64 = 1e-6;

fn flat_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now();
    (0..count)
        .map(|i| {
            Candle::new(
                100.0,
                100.0,
                100.0,
                100.0,
                1000.0,
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

fn uptrend_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now();
    (0..count)
        .map(|i| {
            let base = i as f64;
            Candle::new(
                99.5 + base,
                100.0 + base,
                99.0 + base,
                99.5 + base,
                1000.0,
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn warm_up_needs_two_smoothing_windows() {
    let candles = uptrend_candles(40);
    let out = adx_series(&candles, 14);
    for value in out.iter().take(27) {
        assert_eq!(*value, None);
    }
    assert!(out[27].is_some());
}

#[test]
fn flat_market_has_zero_trend_strength() {
    let candles = flat_candles(40);
    let out = adx_series(&candles, 14);
    for value in out.iter().skip(27) {
        assert!(value.unwrap().abs() < EPS);
    }
}

#[test]
fn one_sided_trend_saturates_at_100() {
    // Every candle makes a higher high and a higher low: -DM is always zero,
    // so DX is pinned at 100 and its smoothed average stays there.
    let candles = uptrend_candles(50);
    let out = adx_series(&candles, 14);
    for value in out.iter().skip(27) {
        assert!((value.unwrap() - 100.0).abs() < EPS);
    }
}

#[test]
fn values_stay_in_range() {
    let start = Utc::now();
    let candles: Vec<Candle> = (0..60)
        .map(|i| {
            let wave = ((i as f64) * 0.7).sin() * 3.0;
            Candle::new(
                100.0 + wave,
                101.5 + wave,
                98.5 + wave,
                100.0 + wave,
                1000.0,
                start + Duration::hours(i as i64),
            )
        })
        .collect();
    let out = adx_series(&candles, 14);
    for value in out.iter().flatten() {
        assert!(*value >= 0.0 && *value <= 100.0);
    }
}

#[test]
fn insufficient_history_yields_all_none() {
    let candles = uptrend_candles(27);
    let out = adx_series(&candles, 14);
    assert!(out.iter().all(|v| v.is_none()));
}
