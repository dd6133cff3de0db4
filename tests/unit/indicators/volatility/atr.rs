//! Unit tests for the ATR series

use bandpulse::indicators::volatility::atr::atr_series;
use bandpulse::models::candle::Candle;
use chrono::{Duration, Utc};

const EPS: f64 = 1e-9;

/// Candles with a constant 2.0 range and unchanged close
fn constant_range_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now();
    (0..count)
        .map(|i| {
            Candle::new(
                100.0,
                101.0,
                99.0,
                100.0,
                1000.0,
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn warm_up_positions_are_none() {
    let candles = constant_range_candles(30);
    let out = atr_series(&candles, 14);
    for value in out.iter().take(14) {
        assert_eq!(*value, None);
    }
    assert!(out[14].is_some());
}

#[test]
fn constant_true_range_gives_constant_atr() {
    let candles = constant_range_candles(40);
    let out = atr_series(&candles, 14);
    for value in out.iter().skip(14) {
        assert!((value.unwrap() - 2.0).abs() < EPS);
    }
}

#[test]
fn gap_inflates_true_range() {
    let start = Utc::now();
    let mut candles = constant_range_candles(20);
    // Gap the last candle well above the previous close
    candles.push(Candle::new(
        110.0,
        111.0,
        109.0,
        110.0,
        1000.0,
        start + Duration::hours(20),
    ));
    let out = atr_series(&candles, 14);
    let last = out.last().unwrap().unwrap();
    // TR of the gap candle is 11 (111 - 100), pulling the average above 2
    assert!(last > 2.0);
}

#[test]
fn insufficient_history_yields_all_none() {
    let candles = constant_range_candles(14);
    let out = atr_series(&candles, 14);
    assert!(out.iter().all(|v| v.is_none()));
}
