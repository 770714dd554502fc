use serde::Serialize;

use stockscope_analytics::{SeriesStore, SummaryStatistics};
use stockscope_core::Symbol;

use crate::cli::StatsArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct StatsResponseData<'a> {
    symbol: &'a Symbol,
    records: usize,
    statistics: SummaryStatistics,
}

pub fn run(
    _args: &StatsArgs,
    store: &SeriesStore,
    symbol: &Symbol,
) -> Result<CommandResult, CliError> {
    let statistics = store.summary(symbol)?;
    let records = store.series(symbol)?.len();

    let data = serde_json::to_value(StatsResponseData {
        symbol,
        records,
        statistics,
    })?;

    Ok(CommandResult::ok(data))
}
