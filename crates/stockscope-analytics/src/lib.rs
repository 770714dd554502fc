//! # Stockscope Analytics
//!
//! Series store and analytics engine over [`stockscope_core::PriceSeries`].
//!
//! ## Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SeriesStore`] | Per-symbol owner of fetched series |
//! | [`AnalyticsEngine`] | Stateless moving-average/return/statistics calculator |
//! | [`SmaWindows`] | Validated short/long window pair |
//! | [`SummaryStatistics`] | Read-only summary snapshot of a series |
//!
//! Every engine operation is a pure function over a series reference; the
//! store offers conveniences that run an operation and cache the derived
//! column back onto the held series. Derived columns are always recomputed
//! in full from raw closes, so re-attaching with identical parameters is
//! idempotent.

mod engine;
mod error;
mod store;

pub use engine::{percent_changes, rolling_mean, AnalyticsEngine, SmaWindows, SummaryStatistics};
pub use error::AnalyticsError;
pub use store::SeriesStore;
