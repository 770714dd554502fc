use thiserror::Error;

use stockscope_analytics::AnalyticsError;

/// Errors surfaced while building or rendering figures.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart kind '{value}', expected one of price-volume, moving-averages, return-histogram")]
    InvalidChartKind { value: String },

    #[error("figure has no datasets to render")]
    EmptyFigure,

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}
