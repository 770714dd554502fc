use stockscope_analytics::SeriesStore;
use stockscope_core::Symbol;

use crate::cli::HistoryArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn run(
    _args: &HistoryArgs,
    store: &SeriesStore,
    symbol: &Symbol,
) -> Result<CommandResult, CliError> {
    let series = store.series(symbol)?;
    let data = serde_json::to_value(series)?;

    let mut result = CommandResult::ok(data);
    if series.is_empty() {
        result = result.with_warning(format!("no candles returned for '{symbol}'"));
    }
    Ok(result)
}
