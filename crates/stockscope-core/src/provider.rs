//! Data provider trait and request/error types.
//!
//! The provider boundary covers everything that touches the network: period
//! selection happens here (the period token maps directly onto the upstream
//! lookback range), and all upstream failures surface as [`ProviderError`].
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | History | [`HistoryRequest`] | [`PriceSeries`] |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{Period, PriceSeries, Symbol};

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Unavailable,
    UnknownSymbol,
    InvalidRequest,
    Internal,
}

/// Structured provider error surfaced unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    retryable: bool,
}

impl ProviderError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn unknown_symbol(symbol: &Symbol) -> Self {
        Self {
            kind: ProviderErrorKind::UnknownSymbol,
            message: format!("no data found for symbol '{symbol}'"),
            retryable: false,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ProviderErrorKind::Unavailable => "provider.unavailable",
            ProviderErrorKind::UnknownSymbol => "provider.unknown_symbol",
            ProviderErrorKind::InvalidRequest => "provider.invalid_request",
            ProviderErrorKind::Internal => "provider.internal",
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderError {}

/// Request payload for the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub period: Period,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol, period: Period) -> Self {
        Self { symbol, period }
    }
}

/// Historical data provider contract.
///
/// Implementations must be `Send + Sync`; the returned series is ordered by
/// strictly ascending date (enforced by [`PriceSeries`] construction).
pub trait DataProvider: Send + Sync {
    /// Fetches daily OHLCV history for a symbol over a lookback period.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the upstream is unavailable, the symbol
    /// is unknown, or the response cannot be parsed into valid candles.
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, ProviderError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        let symbol = Symbol::parse("MSFT").expect("symbol");
        assert_eq!(
            ProviderError::unknown_symbol(&symbol).code(),
            "provider.unknown_symbol"
        );
        assert_eq!(ProviderError::unavailable("x").code(), "provider.unavailable");
        assert!(ProviderError::unavailable("x").retryable());
        assert!(!ProviderError::internal("x").retryable());
    }
}
