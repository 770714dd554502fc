//! Behavior tests for the analytics engine.
//!
//! These verify the numeric contracts: moving-average warm-up and window
//! means, the daily-return formula, summary statistics, and the validation
//! of window pairs and empty series.

use stockscope_analytics::{AnalyticsEngine, AnalyticsError, SmaWindows};
use stockscope_core::{PriceSeries, Symbol};
use stockscope_tests::series_from_closes;

const TOLERANCE: f64 = 1e-9;

fn empty_series() -> PriceSeries {
    PriceSeries::new(Symbol::parse("MSFT").expect("symbol"), Vec::new()).expect("empty series")
}

#[test]
fn moving_average_columns_match_series_length_and_warm_up() {
    // Given: 6 closes and a 3/5 window pair
    let series = series_from_closes("MSFT", &[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
    let windows = SmaWindows::new(3, 5).expect("windows");

    // When: moving averages are computed
    let overlay = AnalyticsEngine::new()
        .moving_averages(&series, windows)
        .expect("overlay");

    // Then: columns run parallel to the candles
    assert_eq!(overlay.short.len(), series.len());
    assert_eq!(overlay.long.len(), series.len());

    // And: positions before window-1 are undefined, defined thereafter
    assert_eq!(overlay.short[0], None);
    assert_eq!(overlay.short[1], None);
    for i in 2..series.len() {
        let expected = (i - 2..=i).map(|j| 10.0 + j as f64).sum::<f64>() / 3.0;
        let actual = overlay.short[i].expect("defined after warm-up");
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "short MA at {i}: {actual} vs {expected}"
        );
    }
    assert_eq!(overlay.long[3], None);
    assert!((overlay.long[4].expect("defined") - 12.0).abs() < TOLERANCE);
}

#[test]
fn daily_returns_reproduce_percentage_change_formula() {
    let closes = [100.0, 110.0, 99.0, 132.0];
    let series = series_from_closes("MSFT", &closes);

    let returns = AnalyticsEngine::new()
        .daily_returns(&series)
        .expect("returns");

    assert_eq!(returns.values.len(), series.len());
    assert_eq!(returns.values[0], None, "no prior day at position 0");
    for i in 1..closes.len() {
        let expected = (closes[i] - closes[i - 1]) / closes[i - 1] * 100.0;
        let actual = returns.values[i].expect("defined");
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "return at {i}: {actual} vs {expected}"
        );
    }
}

#[test]
fn summary_statistics_on_known_series() {
    let series = series_from_closes("MSFT", &[10.0, 20.0, 30.0]);

    let stats = AnalyticsEngine::new().summary(&series).expect("stats");

    assert!((stats.current_price - 30.0).abs() < TOLERANCE);
    assert!((stats.average_price - 20.0).abs() < TOLERANCE);
    assert!((stats.highest_price - 30.0).abs() < TOLERANCE);
    assert!((stats.lowest_price - 10.0).abs() < TOLERANCE);
    // Volumes are 1000, 1100, 1200.
    assert!((stats.average_volume - 1_100.0).abs() < TOLERANCE);

    // Returns are +100% then +50%; sample std dev of [100, 50] is sqrt(1250).
    let sd = stats.daily_return_std_dev.expect("two returns defined");
    assert!((sd - 1250.0_f64.sqrt()).abs() < TOLERANCE);
}

#[test]
fn summary_on_empty_series_fails_with_empty_series_error() {
    let error = AnalyticsEngine::new()
        .summary(&empty_series())
        .expect_err("empty series must fail");
    assert!(matches!(error, AnalyticsError::EmptySeries));
}

#[test]
fn moving_averages_on_empty_series_fail_with_empty_series_error() {
    let windows = SmaWindows::new(2, 3).expect("windows");
    let error = AnalyticsEngine::new()
        .moving_averages(&empty_series(), windows)
        .expect_err("empty series must fail");
    assert!(matches!(error, AnalyticsError::EmptySeries));
}

#[test]
fn inverted_window_pair_is_rejected() {
    let error = SmaWindows::new(50, 20).expect_err("inverted windows must fail");
    assert!(matches!(
        error,
        AnalyticsError::InvalidWindow { short: 50, long: 20 }
    ));
}

#[test]
fn single_record_series_has_undefined_std_dev() {
    let series = series_from_closes("MSFT", &[42.0]);
    let stats = AnalyticsEngine::new().summary(&series).expect("stats");
    assert_eq!(stats.daily_return_std_dev, None);
    assert!((stats.current_price - 42.0).abs() < TOLERANCE);
}

#[test]
fn recomputing_identical_windows_is_idempotent() {
    // Given: a series with an attached overlay
    let mut series = series_from_closes("MSFT", &[10.0, 11.0, 12.0, 13.0, 14.0]);
    let windows = SmaWindows::new(2, 3).expect("windows");
    let engine = AnalyticsEngine::new();

    let first = engine.moving_averages(&series, windows).expect("overlay");
    series.attach_sma(first.clone()).expect("attach");

    // When: the same windows are computed again from the augmented series
    let second = engine.moving_averages(&series, windows).expect("overlay");

    // Then: derived columns are identical and raw candles unchanged
    assert_eq!(first, second);
    assert!((series.candles()[0].close - 10.0).abs() < TOLERANCE);
}
