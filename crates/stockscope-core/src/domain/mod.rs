//! # Domain Models
//!
//! Canonical domain types for stockscope historical price data.
//!
//! ## Overview
//!
//! Strongly-typed models with built-in validation:
//!
//! - **Type-safe**: invalid states are unrepresentable
//! - **Validated**: construction checks all invariants
//! - **Serializable**: full serde support for JSON
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated stock symbol |
//! | [`TradingDate`] | ISO calendar date of a trading day |
//! | [`Candle`] | Daily OHLCV record |
//! | [`PriceSeries`] | Ordered candles plus optional derived columns |
//! | [`SmaOverlay`] | Short/long moving-average columns |
//! | [`ReturnsColumn`] | Daily percentage-return column |
//! | [`Period`] | Historical lookback token (1d .. max) |
//!
//! ## Validation
//!
//! ```rust,ignore
//! use stockscope_core::{Candle, TradingDate, ValidationError};
//!
//! let date = TradingDate::parse("2024-01-02")?;
//! let candle = Candle::new(date, 100.0, 105.0, 95.0, 102.0, 1_000)?;
//!
//! // high < low is rejected at construction
//! let invalid = Candle::new(date, 100.0, 95.0, 105.0, 102.0, 1_000);
//! assert!(matches!(invalid, Err(ValidationError::InvalidCandleRange)));
//! ```

mod candle;
mod date;
mod period;
mod series;
mod symbol;

pub use candle::Candle;
pub use date::TradingDate;
pub use period::Period;
pub use series::{PriceSeries, ReturnsColumn, SmaOverlay};
pub use symbol::Symbol;
