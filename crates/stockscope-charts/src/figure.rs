use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use stockscope_analytics::{AnalyticsEngine, AnalyticsError, SmaWindows};
use stockscope_core::PriceSeries;

use crate::histogram::{histogram, HistogramBin};
use crate::ChartError;

const RETURN_HISTOGRAM_BINS: usize = 50;

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "price-volume")]
    PriceVolume,
    #[serde(rename = "moving-averages")]
    MovingAverages,
    #[serde(rename = "return-histogram")]
    ReturnHistogram,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::PriceVolume, Self::MovingAverages, Self::ReturnHistogram];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceVolume => "price-volume",
            Self::MovingAverages => "moving-averages",
            Self::ReturnHistogram => "return-histogram",
        }
    }
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "price-volume" => Ok(Self::PriceVolume),
            "moving-averages" => Ok(Self::MovingAverages),
            "return-histogram" => Ok(Self::ReturnHistogram),
            other => Err(ChartError::InvalidChartKind {
                value: other.to_owned(),
            }),
        }
    }
}

/// Dataset rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Line,
    Bar,
    Histogram,
}

/// One labeled point; `x` is a date or category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

/// One named dataset within a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub kind: DatasetKind,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub points: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bins: Option<Vec<HistogramBin>>,
}

impl Dataset {
    fn line(label: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            label: label.into(),
            kind: DatasetKind::Line,
            points,
            bins: None,
        }
    }

    fn bar(label: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            label: label.into(),
            kind: DatasetKind::Bar,
            points,
            bins: None,
        }
    }

    fn histogram(label: impl Into<String>, bins: Vec<HistogramBin>) -> Self {
        Self {
            label: label.into(),
            kind: DatasetKind::Histogram,
            points: Vec::new(),
            bins: Some(bins),
        }
    }
}

/// Serializable figure description handed to an external renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub datasets: Vec<Dataset>,
}

impl FigureSpec {
    /// Build the figure for a chart kind from a fetched series.
    pub fn build(
        series: &PriceSeries,
        kind: ChartKind,
        windows: SmaWindows,
    ) -> Result<Self, ChartError> {
        match kind {
            ChartKind::PriceVolume => Self::price_volume(series),
            ChartKind::MovingAverages => Self::moving_averages(series, windows),
            ChartKind::ReturnHistogram => Self::return_histogram(series),
        }
    }

    /// Closing-price line with volume bars underneath.
    pub fn price_volume(series: &PriceSeries) -> Result<Self, ChartError> {
        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries.into());
        }

        let closes = series
            .candles()
            .iter()
            .map(|candle| Point {
                x: candle.date.format_iso(),
                y: candle.close,
            })
            .collect();
        let volumes = series
            .candles()
            .iter()
            .map(|candle| Point {
                x: candle.date.format_iso(),
                y: candle.volume as f64,
            })
            .collect();

        Ok(Self {
            title: format!("{} Stock Price History", series.symbol()),
            x_label: String::from("Date"),
            y_label: String::from("Price (USD)"),
            datasets: vec![
                Dataset::line("Close", closes),
                Dataset::bar("Volume", volumes),
            ],
        })
    }

    /// Closing-price line plus short/long simple moving averages.
    ///
    /// SMA lines carry points only where the window is full, leaving a gap
    /// over the warm-up prefix.
    pub fn moving_averages(series: &PriceSeries, windows: SmaWindows) -> Result<Self, ChartError> {
        let overlay = AnalyticsEngine::new().moving_averages(series, windows)?;

        let price = series
            .candles()
            .iter()
            .map(|candle| Point {
                x: candle.date.format_iso(),
                y: candle.close,
            })
            .collect();
        let short = defined_points(series, &overlay.short);
        let long = defined_points(series, &overlay.long);

        Ok(Self {
            title: format!("{} Stock Price with Moving Averages", series.symbol()),
            x_label: String::from("Date"),
            y_label: String::from("Price (USD)"),
            datasets: vec![
                Dataset::line("Price", price),
                Dataset::line(format!("{}-day SMA", overlay.short_window), short),
                Dataset::line(format!("{}-day SMA", overlay.long_window), long),
            ],
        })
    }

    /// Daily-return distribution binned into 50 equal-width buckets.
    pub fn return_histogram(series: &PriceSeries) -> Result<Self, ChartError> {
        let returns = AnalyticsEngine::new().daily_returns(series)?;
        let defined: Vec<f64> = returns.values.into_iter().flatten().collect();
        let bins = histogram(&defined, RETURN_HISTOGRAM_BINS);

        Ok(Self {
            title: format!("{} Daily Returns Distribution", series.symbol()),
            x_label: String::from("Daily Returns (%)"),
            y_label: String::from("Frequency"),
            datasets: vec![Dataset::histogram("Daily Returns", bins)],
        })
    }
}

fn defined_points(series: &PriceSeries, column: &[Option<f64>]) -> Vec<Point> {
    series
        .candles()
        .iter()
        .zip(column)
        .filter_map(|(candle, value)| {
            value.map(|y| Point {
                x: candle.date.format_iso(),
                y,
            })
        })
        .collect()
}
