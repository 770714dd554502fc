use std::collections::HashMap;

use stockscope_core::{PriceSeries, Symbol};

use crate::engine::{AnalyticsEngine, SmaWindows, SummaryStatistics};
use crate::AnalyticsError;

/// Per-symbol owner of fetched price series.
///
/// Entries are independent; setting a series for one symbol never affects
/// another. Every analytics accessor goes through [`SeriesStore::series`]
/// and propagates [`AnalyticsError::NotLoaded`] unchanged when the symbol
/// has not been loaded.
#[derive(Debug, Default)]
pub struct SeriesStore {
    series: HashMap<Symbol, PriceSeries>,
    engine: AnalyticsEngine,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fetched series, replacing any previous series for its symbol.
    ///
    /// Returns the replaced series, if any.
    pub fn set_series(&mut self, series: PriceSeries) -> Option<PriceSeries> {
        self.series.insert(series.symbol().clone(), series)
    }

    /// Borrow the series loaded for a symbol.
    ///
    /// # Errors
    ///
    /// [`AnalyticsError::NotLoaded`] when nothing has been set for `symbol`.
    pub fn series(&self, symbol: &Symbol) -> Result<&PriceSeries, AnalyticsError> {
        self.series
            .get(symbol)
            .ok_or_else(|| AnalyticsError::NotLoaded {
                symbol: symbol.to_string(),
            })
    }

    fn series_mut(&mut self, symbol: &Symbol) -> Result<&mut PriceSeries, AnalyticsError> {
        self.series
            .get_mut(symbol)
            .ok_or_else(|| AnalyticsError::NotLoaded {
                symbol: symbol.to_string(),
            })
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.series.keys()
    }

    /// Compute moving averages and cache them on the stored series.
    ///
    /// Returns the augmented series; raw candles are untouched.
    pub fn attach_moving_averages(
        &mut self,
        symbol: &Symbol,
        windows: SmaWindows,
    ) -> Result<&PriceSeries, AnalyticsError> {
        let overlay = self.engine.moving_averages(self.series(symbol)?, windows)?;
        let series = self.series_mut(symbol)?;
        series.attach_sma(overlay)?;
        Ok(&*series)
    }

    /// Compute daily returns and cache them on the stored series.
    ///
    /// Returns the augmented series; raw candles are untouched.
    pub fn attach_daily_returns(
        &mut self,
        symbol: &Symbol,
    ) -> Result<&PriceSeries, AnalyticsError> {
        let returns = self.engine.daily_returns(self.series(symbol)?)?;
        let series = self.series_mut(symbol)?;
        series.attach_returns(returns)?;
        Ok(&*series)
    }

    /// Summary statistics for the stored series.
    pub fn summary(&self, symbol: &Symbol) -> Result<SummaryStatistics, AnalyticsError> {
        self.engine.summary(self.series(symbol)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockscope_core::{Candle, TradingDate};

    fn series(symbol: &str, closes: &[f64]) -> PriceSeries {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let day = i + 1;
                Candle::new(
                    TradingDate::parse(&format!("2024-01-{day:02}")).expect("date"),
                    close,
                    close + 1.0,
                    (close - 1.0).max(0.01),
                    close,
                    1_000,
                )
                .expect("candle")
            })
            .collect();
        PriceSeries::new(Symbol::parse(symbol).expect("symbol"), candles).expect("series")
    }

    #[test]
    fn accessor_fails_before_any_series_is_set() {
        let store = SeriesStore::new();
        let err = store
            .series(&Symbol::parse("MSFT").expect("symbol"))
            .expect_err("must fail");
        assert!(matches!(err, AnalyticsError::NotLoaded { .. }));
    }

    #[test]
    fn set_series_replaces_previous_entry() {
        let mut store = SeriesStore::new();
        assert!(store.set_series(series("MSFT", &[10.0, 11.0])).is_none());
        let replaced = store
            .set_series(series("MSFT", &[20.0, 21.0]))
            .expect("previous entry returned");
        assert_eq!(replaced.candles()[0].close, 10.0);

        let symbol = Symbol::parse("MSFT").expect("symbol");
        let held = store.series(&symbol).expect("loaded");
        assert_eq!(held.candles()[0].close, 20.0);
    }

    #[test]
    fn symbols_are_independent() {
        let mut store = SeriesStore::new();
        store.set_series(series("MSFT", &[10.0, 11.0]));
        store.set_series(series("AAPL", &[30.0, 31.0]));

        let msft = Symbol::parse("MSFT").expect("symbol");
        let aapl = Symbol::parse("AAPL").expect("symbol");
        store
            .attach_daily_returns(&msft)
            .expect("returns attach for msft");

        assert!(store.series(&msft).expect("msft").returns().is_some());
        assert!(store.series(&aapl).expect("aapl").returns().is_none());
    }
}
