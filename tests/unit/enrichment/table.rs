//! Unit tests for the indicator enrichment table

use bandpulse::enrichment::{enrich, MIN_CANDLES};
use bandpulse::models::candle::Candle;
use chrono::{DateTime, Duration, Utc};

fn start_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
}

fn uptrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = i as f64 * 0.5;
            Candle::new(
                99.5 + base,
                100.0 + base,
                99.0 + base,
                99.5 + base,
                1000.0 + i as f64,
                start_time() + Duration::hours(4 * i as i64),
            )
        })
        .collect()
}

#[test]
fn minimum_window_is_the_atr_sma_chain() {
    assert_eq!(MIN_CANDLES, 64);
}

#[test]
fn fewer_than_fifty_candles_yields_empty_table() {
    assert!(enrich(&uptrend_candles(49)).is_empty());
}

#[test]
fn one_short_of_the_warm_up_yields_empty_table() {
    assert!(enrich(&uptrend_candles(MIN_CANDLES - 1)).is_empty());
}

#[test]
fn empty_input_yields_empty_table() {
    assert!(enrich(&[]).is_empty());
}

#[test]
fn exact_warm_up_yields_one_row() {
    let table = enrich(&uptrend_candles(MIN_CANDLES));
    assert_eq!(table.len(), 1);
}

#[test]
fn each_candle_past_the_warm_up_adds_one_row() {
    let table = enrich(&uptrend_candles(MIN_CANDLES + 6));
    assert_eq!(table.len(), 7);
}

#[test]
fn rows_keep_chronological_order_and_identity() {
    let candles = uptrend_candles(MIN_CANDLES + 10);
    let table = enrich(&candles);
    assert_eq!(table.len(), 11);
    for (i, row) in table.iter().enumerate() {
        assert_eq!(row.timestamp(), candles[MIN_CANDLES - 1 + i].timestamp);
        assert_eq!(row.close(), candles[MIN_CANDLES - 1 + i].close);
    }
    for pair in table.windows(2) {
        assert!(pair[0].timestamp() < pair[1].timestamp());
    }
}

#[test]
fn derived_fields_are_plausible() {
    let table = enrich(&uptrend_candles(MIN_CANDLES + 10));
    for row in &table {
        assert!(row.rsi_14 >= 0.0 && row.rsi_14 <= 100.0);
        assert!(row.adx >= 0.0 && row.adx <= 100.0);
        assert!(row.bb_upper >= row.bb_lower);
        assert!(row.atr > 0.0);
        assert!(row.atr_sma_50 > 0.0);
        assert!(row.sma_20 > 0.0);
    }
}

#[test]
fn enrichment_is_deterministic() {
    let candles = uptrend_candles(MIN_CANDLES + 5);
    assert_eq!(enrich(&candles), enrich(&candles));
}
