use serde::{Deserialize, Serialize};

use crate::{Candle, Symbol, ValidationError};

/// Moving-average columns derived from a series' closes.
///
/// The vectors run parallel to the raw candles; `None` marks positions where
/// the trailing window is not yet full (`i < window - 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaOverlay {
    pub short_window: usize,
    pub long_window: usize,
    pub short: Vec<Option<f64>>,
    pub long: Vec<Option<f64>>,
}

/// Daily percentage-return column derived from a series' closes.
///
/// `None` marks undefined positions: the first record (no prior day) and any
/// position whose prior close is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnsColumn {
    pub values: Vec<Option<f64>>,
}

/// Ordered daily price history for one symbol.
///
/// Raw candles are immutable once constructed; analytics may attach derived
/// columns, which are always recomputed in full from the raw closes and
/// overwrite any previous column for the same concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: Symbol,
    candles: Vec<Candle>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    sma: Option<SmaOverlay>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    returns: Option<ReturnsColumn>,
}

impl PriceSeries {
    /// Build a series, enforcing strictly increasing candle dates.
    pub fn new(symbol: Symbol, candles: Vec<Candle>) -> Result<Self, ValidationError> {
        for pair in candles.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ValidationError::NonMonotonicDates {
                    date: pair[1].date.to_string(),
                });
            }
        }

        Ok(Self {
            symbol,
            candles,
            sma: None,
            returns: None,
        })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.candles.iter().map(|candle| candle.close)
    }

    pub fn volumes(&self) -> impl Iterator<Item = u64> + '_ {
        self.candles.iter().map(|candle| candle.volume)
    }

    pub fn sma(&self) -> Option<&SmaOverlay> {
        self.sma.as_ref()
    }

    pub fn returns(&self) -> Option<&ReturnsColumn> {
        self.returns.as_ref()
    }

    /// Attach (or replace) the moving-average overlay.
    ///
    /// Column lengths must match the series length; raw candles are untouched.
    pub fn attach_sma(&mut self, overlay: SmaOverlay) -> Result<(), ValidationError> {
        self.check_column_len(overlay.short.len())?;
        self.check_column_len(overlay.long.len())?;
        self.sma = Some(overlay);
        Ok(())
    }

    /// Attach (or replace) the daily-returns column.
    pub fn attach_returns(&mut self, returns: ReturnsColumn) -> Result<(), ValidationError> {
        self.check_column_len(returns.values.len())?;
        self.returns = Some(returns);
        Ok(())
    }

    fn check_column_len(&self, len: usize) -> Result<(), ValidationError> {
        if len != self.candles.len() {
            return Err(ValidationError::ColumnLengthMismatch {
                len,
                expected: self.candles.len(),
            });
        }
        Ok(())
    }
}
