//! CLI argument definitions for stockscope.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `history` | Fetch historical daily candles |
//! | `stats` | Summary statistics for a symbol |
//! | `sma` | Series with short/long moving-average columns |
//! | `returns` | Series with daily percentage-return column |
//! | `chart` | Figure specification for a chart kind |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--period` | `1y` | Lookback period token |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//! | `--mock` | `false` | Deterministic offline data |
//!
//! # Examples
//!
//! ```bash
//! # Summary statistics over one year
//! stockscope stats MSFT
//!
//! # Moving averages over six months, pretty JSON
//! stockscope sma MSFT --period 6mo --short 20 --long 50 --pretty
//!
//! # Return-distribution figure spec
//! stockscope chart MSFT --kind return-histogram
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Historical stock analytics and chart specs from Yahoo Finance.
#[derive(Debug, Parser)]
#[command(
    name = "stockscope",
    author,
    version,
    about = "Historical stock analytics CLI",
    long_about = "Stockscope fetches historical daily OHLCV data for a stock symbol and derives\n\
moving averages, daily returns, summary statistics, and chart specifications.\n\
\n\
Use 'stockscope <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Lookback period token (1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max).
    #[arg(long, global = true, default_value = "1y")]
    pub period: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Use deterministic offline data instead of the live provider.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Key/value text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch historical daily OHLCV candles.
    ///
    /// # Examples
    ///
    ///   stockscope history MSFT
    ///   stockscope history MSFT --period 3mo --pretty
    History(HistoryArgs),

    /// Summary statistics (current/average/high/low price, return std dev,
    /// average volume).
    ///
    /// # Examples
    ///
    ///   stockscope stats MSFT
    ///   stockscope stats MSFT --period 5y
    Stats(StatsArgs),

    /// Series augmented with short/long simple moving averages.
    ///
    /// # Examples
    ///
    ///   stockscope sma MSFT
    ///   stockscope sma MSFT --short 10 --long 30
    Sma(SmaArgs),

    /// Series augmented with daily percentage returns.
    ///
    /// # Examples
    ///
    ///   stockscope returns MSFT --period 6mo
    Returns(ReturnsArgs),

    /// Figure specification for a chart kind.
    ///
    /// # Examples
    ///
    ///   stockscope chart MSFT --kind price-volume
    ///   stockscope chart MSFT --kind moving-averages --short 20 --long 50
    ///   stockscope chart MSFT --kind return-histogram
    Chart(ChartArgs),
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Market symbol to fetch (e.g., MSFT).
    pub symbol: String,
}

/// Arguments for the `stats` command.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Market symbol to analyze.
    pub symbol: String,
}

/// Arguments for the `sma` command.
#[derive(Debug, Args)]
pub struct SmaArgs {
    /// Market symbol to analyze.
    pub symbol: String,

    /// Short moving-average window in trading days.
    #[arg(long, default_value_t = 20)]
    pub short: usize,

    /// Long moving-average window in trading days (must exceed --short).
    #[arg(long, default_value_t = 50)]
    pub long: usize,
}

/// Arguments for the `returns` command.
#[derive(Debug, Args)]
pub struct ReturnsArgs {
    /// Market symbol to analyze.
    pub symbol: String,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Market symbol to chart.
    pub symbol: String,

    /// Chart kind (price-volume, moving-averages, return-histogram).
    #[arg(long)]
    pub kind: String,

    /// Short moving-average window (moving-averages kind only).
    #[arg(long, default_value_t = 20)]
    pub short: usize,

    /// Long moving-average window (moving-averages kind only).
    #[arg(long, default_value_t = 50)]
    pub long: usize,
}
