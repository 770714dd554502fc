use serde::{Deserialize, Serialize};

use stockscope_core::{PriceSeries, ReturnsColumn, SmaOverlay};

use crate::AnalyticsError;

/// Validated short/long moving-average window pair.
///
/// Both windows must be positive and the short window strictly smaller than
/// the long one, so the two averages stay visually distinct on a chart.
/// Deserialization funnels through [`SmaWindows::new`], so an inverted pair
/// is rejected on the wire as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSmaWindows")]
pub struct SmaWindows {
    short: usize,
    long: usize,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawSmaWindows {
    short: usize,
    long: usize,
}

impl TryFrom<RawSmaWindows> for SmaWindows {
    type Error = AnalyticsError;

    fn try_from(raw: RawSmaWindows) -> Result<Self, Self::Error> {
        Self::new(raw.short, raw.long)
    }
}

impl SmaWindows {
    pub fn new(short: usize, long: usize) -> Result<Self, AnalyticsError> {
        if short == 0 || long == 0 || short >= long {
            return Err(AnalyticsError::InvalidWindow { short, long });
        }
        Ok(Self { short, long })
    }

    pub const fn short(self) -> usize {
        self.short
    }

    pub const fn long(self) -> usize {
        self.long
    }
}

impl Default for SmaWindows {
    fn default() -> Self {
        Self {
            short: 20,
            long: 50,
        }
    }
}

/// Read-only summary snapshot of a price series.
///
/// `daily_return_std_dev` is the sample standard deviation of the percentage
/// daily returns; it is `None` when fewer than two returns are defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub current_price: f64,
    pub average_price: f64,
    pub highest_price: f64,
    pub lowest_price: f64,
    pub daily_return_std_dev: Option<f64>,
    pub average_volume: f64,
}

/// Trailing-window arithmetic mean over a value slice.
///
/// Position `i` is `None` until the window is full (`i < window - 1`).
/// A zero window yields all-`None`; callers validate via [`SmaWindows`].
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || window > values.len() {
        return out;
    }

    let mut sum = 0.0;
    for (i, &value) in values.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            out[i] = Some(sum / window as f64);
        }
    }
    out
}

/// Day-over-day percentage change of a value slice.
///
/// Position 0 is `None` (no prior value). A zero prior value makes the
/// change undefined, marked `None` rather than a floating-point infinity.
pub fn percent_changes(values: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    for i in 1..values.len() {
        let prev = values[i - 1];
        if prev != 0.0 {
            out[i] = Some((values[i] - prev) / prev * 100.0);
        }
    }
    out
}

/// Stateless calculator deriving columns and statistics from a price series.
///
/// Operations never mutate the series they read; callers (or the store)
/// decide whether to attach the result back onto a series.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Short/long simple moving averages over the series' closes.
    ///
    /// Output columns run parallel to the candles (length N), undefined
    /// until each trailing window fills.
    ///
    /// # Errors
    ///
    /// [`AnalyticsError::EmptySeries`] when the series has no records.
    pub fn moving_averages(
        &self,
        series: &PriceSeries,
        windows: SmaWindows,
    ) -> Result<SmaOverlay, AnalyticsError> {
        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }

        let closes: Vec<f64> = series.closes().collect();
        Ok(SmaOverlay {
            short_window: windows.short(),
            long_window: windows.long(),
            short: rolling_mean(&closes, windows.short()),
            long: rolling_mean(&closes, windows.long()),
        })
    }

    /// Percentage daily returns over the series' closes.
    ///
    /// # Errors
    ///
    /// [`AnalyticsError::EmptySeries`] when the series has no records.
    pub fn daily_returns(&self, series: &PriceSeries) -> Result<ReturnsColumn, AnalyticsError> {
        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }

        let closes: Vec<f64> = series.closes().collect();
        Ok(ReturnsColumn {
            values: percent_changes(&closes),
        })
    }

    /// Summary statistics over the series' closes and volumes.
    ///
    /// # Errors
    ///
    /// [`AnalyticsError::EmptySeries`] when the series has no records.
    pub fn summary(&self, series: &PriceSeries) -> Result<SummaryStatistics, AnalyticsError> {
        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }

        let closes: Vec<f64> = series.closes().collect();
        let n = closes.len() as f64;

        let current_price = closes[closes.len() - 1];
        let average_price = closes.iter().sum::<f64>() / n;
        let highest_price = closes.iter().cloned().fold(f64::MIN, f64::max);
        let lowest_price = closes.iter().cloned().fold(f64::MAX, f64::min);
        let average_volume = series.volumes().map(|v| v as f64).sum::<f64>() / n;

        let returns: Vec<f64> = percent_changes(&closes).into_iter().flatten().collect();
        let daily_return_std_dev = sample_std_dev(&returns);

        Ok(SummaryStatistics {
            current_price,
            average_price,
            highest_price,
            lowest_price,
            daily_return_std_dev,
            average_volume,
        })
    }
}

/// Sample (n-1) standard deviation; `None` below two observations.
fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum::<f64>()
        / (n - 1.0);
    Some(variance.sqrt())
}
