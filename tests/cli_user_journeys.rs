//! End-to-end command journeys over the deterministic offline provider.
//!
//! Each test parses a real argument vector, runs the command dispatcher,
//! and inspects the resulting payload or the exit code its error maps to.

use clap::Parser;

use stockscope_cli::cli::Cli;
use stockscope_cli::commands;

#[tokio::test]
async fn stats_journey_reports_statistics_for_the_period() {
    // Given: a stats invocation against offline data
    let cli = Cli::parse_from(["stockscope", "--mock", "--period", "1mo", "stats", "msft"]);

    // When: the command runs
    let result = commands::run(&cli).await.expect("stats command");

    // Then: the payload names the normalized symbol and sizes to the period
    assert_eq!(result.data["symbol"], "MSFT");
    assert_eq!(result.data["records"], 21);
    assert!(result.data["statistics"]["current_price"].is_number());
    assert!(result.data["statistics"]["average_volume"].is_number());
}

#[tokio::test]
async fn history_journey_returns_candles_and_no_warnings() {
    let cli = Cli::parse_from(["stockscope", "--mock", "--period", "5d", "history", "MSFT"]);

    let result = commands::run(&cli).await.expect("history command");

    let candles = result.data["candles"].as_array().expect("candle array");
    assert_eq!(candles.len(), 5);
    assert!(result.warnings.is_empty());
}

#[tokio::test]
async fn chart_journey_emits_a_figure_spec() {
    let cli = Cli::parse_from([
        "stockscope",
        "--mock",
        "chart",
        "MSFT",
        "--kind",
        "price-volume",
    ]);

    let result = commands::run(&cli).await.expect("chart command");

    assert_eq!(result.data["title"], "MSFT Stock Price History");
    assert_eq!(
        result.data["datasets"].as_array().expect("datasets").len(),
        2
    );
}

#[tokio::test]
async fn invalid_period_maps_to_the_validation_exit_code() {
    let cli = Cli::parse_from(["stockscope", "--mock", "--period", "7w", "history", "MSFT"]);

    let error = commands::run(&cli).await.expect_err("must fail");

    assert_eq!(error.exit_code(), 2);
}

#[tokio::test]
async fn inverted_sma_windows_map_to_the_analytics_exit_code() {
    let cli = Cli::parse_from([
        "stockscope",
        "--mock",
        "sma",
        "MSFT",
        "--short",
        "50",
        "--long",
        "20",
    ]);

    let error = commands::run(&cli).await.expect_err("must fail");

    assert_eq!(error.exit_code(), 4);
}

#[tokio::test]
async fn unknown_chart_kind_maps_to_the_analytics_exit_code() {
    let cli = Cli::parse_from(["stockscope", "--mock", "chart", "MSFT", "--kind", "pie"]);

    let error = commands::run(&cli).await.expect_err("must fail");

    assert_eq!(error.exit_code(), 4);
}
