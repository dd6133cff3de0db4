//! Unit tests for the Bollinger Band series

use bandpulse::indicators::volatility::bollinger::bollinger_series;

const EPS: f64 = 1e-9;

#[test]
fn warm_up_positions_are_none() {
    let closes = vec![100.0; 25];
    let out = bollinger_series(&closes, 20, 2.0);
    for value in out.iter().take(19) {
        assert!(value.is_none());
    }
    assert!(out[19].is_some());
}

#[test]
fn constant_series_collapses_bands_onto_mean() {
    let closes = vec![100.0; 25];
    let out = bollinger_series(&closes, 20, 2.0);
    for bands in out.iter().flatten() {
        assert!((bands.upper - 100.0).abs() < EPS);
        assert!((bands.lower - 100.0).abs() < EPS);
    }
}

#[test]
fn bands_are_symmetric_around_the_window_mean() {
    let closes: Vec<f64> = (1..=40).map(|i| i as f64).collect();
    let out = bollinger_series(&closes, 20, 2.0);
    let bands = out[19].unwrap();
    // Window 1..=20 has mean 10.5
    assert!(((bands.upper + bands.lower) / 2.0 - 10.5).abs() < EPS);
    assert!(bands.upper > bands.lower);
}

#[test]
fn wider_deviation_multiplier_widens_bands() {
    let closes: Vec<f64> = (1..=25).map(|i| (i as f64).sin() * 5.0 + 100.0).collect();
    let narrow = bollinger_series(&closes, 20, 1.0);
    let wide = bollinger_series(&closes, 20, 2.0);
    let n = narrow[24].unwrap();
    let w = wide[24].unwrap();
    assert!(w.upper > n.upper);
    assert!(w.lower < n.lower);
}

#[test]
fn insufficient_history_yields_all_none() {
    let closes = vec![100.0; 19];
    let out = bollinger_series(&closes, 20, 2.0);
    assert!(out.iter().all(|v| v.is_none()));
}
