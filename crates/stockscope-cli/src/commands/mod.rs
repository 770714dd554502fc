mod chart;
mod history;
mod returns;
mod sma;
mod stats;

use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use stockscope_analytics::SeriesStore;
use stockscope_core::{
    DataProvider, HistoryRequest, NoopHttpClient, Period, ReqwestHttpClient, Symbol, YahooProvider,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let provider = build_provider(cli);
    let period = Period::from_str(&cli.period)?;

    let symbol = Symbol::parse(command_symbol(&cli.command))?;
    let series = provider
        .history(HistoryRequest::new(symbol.clone(), period))
        .await?;

    let mut store = SeriesStore::new();
    store.set_series(series);

    match &cli.command {
        Command::History(args) => history::run(args, &store, &symbol),
        Command::Stats(args) => stats::run(args, &store, &symbol),
        Command::Sma(args) => sma::run(args, &mut store, &symbol),
        Command::Returns(args) => returns::run(args, &mut store, &symbol),
        Command::Chart(args) => chart::run(args, &store, &symbol),
    }
}

fn build_provider(cli: &Cli) -> YahooProvider {
    if cli.mock {
        YahooProvider::with_http_client(Arc::new(NoopHttpClient))
    } else {
        YahooProvider::with_http_client(Arc::new(ReqwestHttpClient::new()))
            .with_timeout_ms(cli.timeout_ms)
    }
}

fn command_symbol(command: &Command) -> &str {
    match command {
        Command::History(args) => &args.symbol,
        Command::Stats(args) => &args.symbol,
        Command::Sma(args) => &args.symbol,
        Command::Returns(args) => &args.symbol,
        Command::Chart(args) => &args.symbol,
    }
}
