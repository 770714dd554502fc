//! # Stockscope Core
//!
//! Domain types and the data-provider boundary for the stockscope toolkit.
//!
//! ## Overview
//!
//! This crate provides the foundational pieces:
//!
//! - **Validated domain models** for symbols, trading dates, candles, and
//!   price series with optional derived columns
//! - **Period vocabulary** for historical lookback selection
//! - **Provider trait** for historical data adapters
//! - **HTTP client abstraction** with a deterministic offline transport
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (Symbol, TradingDate, Candle, PriceSeries, Period) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`provider`] | Data provider trait and request/error types |
//! | [`yahoo`] | Yahoo Finance chart-API provider |
//!
//! ## Error Handling
//!
//! Construction of every domain type validates its invariants and returns a
//! [`ValidationError`] on violation. Provider calls return a structured
//! [`ProviderError`] with a kind, a stable code, and a retryable flag. The
//! core performs no logging; errors surface unchanged to the caller.

pub mod domain;
pub mod error;
pub mod http_client;
pub mod provider;
pub mod yahoo;

pub use domain::{
    Candle, Period, PriceSeries, ReturnsColumn, SmaOverlay, Symbol, TradingDate,
};
pub use error::{CoreError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use provider::{DataProvider, HistoryRequest, ProviderError, ProviderErrorKind};
pub use yahoo::YahooProvider;
