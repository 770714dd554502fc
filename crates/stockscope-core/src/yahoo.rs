//! Yahoo Finance chart-API provider.
//!
//! Fetches daily OHLCV history via the public v8 chart endpoint. The period
//! token passes straight through as the `range` query parameter. With a mock
//! transport the provider produces deterministic seeded candles instead, so
//! tests and `--mock` runs stay offline.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::Duration;

use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::provider::{DataProvider, HistoryRequest, ProviderError};
use crate::{Candle, PriceSeries, TradingDate, ValidationError};

const CHART_ENDPOINT: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Anchor date for deterministic mock candles.
const MOCK_ANCHOR: &str = "2024-12-31";

/// Yahoo Finance history provider.
pub struct YahooProvider {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            timeout_ms: 10_000,
        }
    }
}

impl YahooProvider {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn is_real_client(&self) -> bool {
        !self.http_client.is_mock()
    }

    async fn fetch_real_history(&self, req: &HistoryRequest) -> Result<PriceSeries, ProviderError> {
        let endpoint = format!(
            "{}/{}?range={}&interval=1d",
            CHART_ENDPOINT,
            urlencoding::encode(req.symbol.as_str()),
            req.period.as_str(),
        );

        let request = HttpRequest::get(endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            ProviderError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;

        if response.status == 404 {
            return Err(ProviderError::unknown_symbol(&req.symbol));
        }
        if !response.is_success() {
            return Err(ProviderError::unavailable(format!(
                "yahoo upstream returned status {}",
                response.status
            )));
        }

        parse_chart_response(&response.body, req)
    }

    async fn fetch_fake_history(&self, req: &HistoryRequest) -> Result<PriceSeries, ProviderError> {
        // Exercise the transport so failing test doubles surface as errors.
        let probe = HttpRequest::get(format!(
            "{}/{}",
            CHART_ENDPOINT,
            urlencoding::encode(req.symbol.as_str())
        ));
        let response = self.http_client.execute(probe).await.map_err(|error| {
            ProviderError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;
        if !response.is_success() {
            return Err(ProviderError::unavailable(format!(
                "yahoo upstream returned status {}",
                response.status
            )));
        }

        let anchor = TradingDate::parse(MOCK_ANCHOR)
            .map_err(validation_to_error)?
            .into_inner();
        let seed = symbol_seed(req.symbol.as_str());
        let count = req.period.approx_trading_days();
        let mut candles = Vec::with_capacity(count);

        for index in 0..count {
            let offset = Duration::days(count.saturating_sub(index + 1) as i64);
            let date = TradingDate::from_date(anchor - offset);
            let base = 90.0 + ((seed + index as u64) % 350) as f64 / 10.0;

            let candle = Candle::new(
                date,
                base,
                base + 1.20,
                base - 0.80,
                base + 0.30,
                20_000 + (index as u64) * 25,
            )
            .map_err(validation_to_error)?;
            candles.push(candle);
        }

        PriceSeries::new(req.symbol.clone(), candles).map_err(validation_to_error)
    }
}

impl DataProvider for YahooProvider {
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, ProviderError>> + Send + 'a>> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_history(&req).await
            } else {
                self.fetch_fake_history(&req).await
            }
        })
    }
}

fn parse_chart_response(body: &str, req: &HistoryRequest) -> Result<PriceSeries, ProviderError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|error| ProviderError::internal(format!("failed to parse yahoo chart: {error}")))?;

    if let Some(error) = &chart_response.chart.error {
        if error.code.eq_ignore_ascii_case("not found") {
            return Err(ProviderError::unknown_symbol(&req.symbol));
        }
        return Err(ProviderError::unavailable(format!(
            "yahoo chart API error: {}: {}",
            error.code, error.description
        )));
    }

    let result = chart_response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| ProviderError::unknown_symbol(&req.symbol))?;

    let timestamps = result
        .timestamp
        .ok_or_else(|| ProviderError::internal("no timestamp data in chart response"))?;
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::internal("no quote data in chart response"))?;

    let mut candles = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let date = TradingDate::from_unix_timestamp(ts).map_err(validation_to_error)?;

        // Keep a row only when all OHLC slots are present; Yahoo pads
        // partial sessions with nulls.
        if let (Some(Some(open)), Some(Some(high)), Some(Some(low)), Some(Some(close))) = (
            quote.open.get(i),
            quote.high.get(i),
            quote.low.get(i),
            quote.close.get(i),
        ) {
            let volume = quote
                .volume
                .get(i)
                .copied()
                .flatten()
                .map(|v| v.max(0) as u64)
                .unwrap_or(0);

            if let Ok(candle) = Candle::new(date, *open, *high, *low, *close, volume) {
                candles.push(candle);
            }
        }
    }

    PriceSeries::new(req.symbol.clone(), candles).map_err(validation_to_error)
}

fn symbol_seed(symbol: &str) -> u64 {
    symbol.bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

fn validation_to_error(error: ValidationError) -> ProviderError {
    ProviderError::internal(error.to_string())
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Period, Symbol};

    fn request(period: Period) -> HistoryRequest {
        HistoryRequest::new(Symbol::parse("MSFT").expect("symbol"), period)
    }

    #[test]
    fn parses_chart_payload_and_skips_null_rows() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000, 1704326400],
                    "indicators": {
                        "quote": [{
                            "open": [100.0, null, 102.0],
                            "high": [105.0, 104.0, 106.0],
                            "low": [99.0, 100.0, 101.0],
                            "close": [103.0, 102.0, 104.0],
                            "volume": [1000, 900, null]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let series = parse_chart_response(body, &request(Period::FiveDays)).expect("must parse");
        assert_eq!(series.len(), 2);
        assert_eq!(series.candles()[0].date.format_iso(), "2024-01-02");
        assert_eq!(series.candles()[1].volume, 0);
    }

    #[test]
    fn maps_not_found_error_to_unknown_symbol() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;

        let error = parse_chart_response(body, &request(Period::OneYear)).expect_err("must fail");
        assert_eq!(error.code(), "provider.unknown_symbol");
    }

    #[test]
    fn mock_candles_are_deterministic_per_symbol() {
        let provider = YahooProvider::default();
        let first = futures_executor(provider.history(request(Period::OneMonth)))
            .expect("mock history should succeed");
        let second = futures_executor(provider.history(request(Period::OneMonth)))
            .expect("mock history should succeed");
        assert_eq!(first, second);
        assert_eq!(first.len(), Period::OneMonth.approx_trading_days());
    }

    fn futures_executor<F: Future>(future: F) -> F::Output {
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn raw_waker() -> RawWaker {
            fn clone(_: *const ()) -> RawWaker {
                raw_waker()
            }
            fn noop(_: *const ()) {}
            RawWaker::new(
                std::ptr::null(),
                &RawWakerVTable::new(clone, noop, noop, noop),
            )
        }

        // SAFETY: the vtable functions never dereference the null data pointer.
        let waker = unsafe { Waker::from_raw(raw_waker()) };
        let mut context = Context::from_waker(&waker);
        let mut future = std::pin::pin!(future);
        loop {
            match future.as_mut().poll(&mut context) {
                Poll::Ready(output) => return output,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }
}
