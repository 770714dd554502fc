use thiserror::Error;

use stockscope_core::ValidationError;

/// Errors surfaced by the analytics layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("no series loaded for symbol '{symbol}'; fetch data first")]
    NotLoaded { symbol: String },

    #[error("series has no records; statistics are undefined for an empty series")]
    EmptySeries,

    #[error("invalid windows: short={short}, long={long}; both must be positive and short < long")]
    InvalidWindow { short: usize, long: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
