use stockscope_analytics::SeriesStore;
use stockscope_core::Symbol;

use crate::cli::ReturnsArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn run(
    _args: &ReturnsArgs,
    store: &mut SeriesStore,
    symbol: &Symbol,
) -> Result<CommandResult, CliError> {
    let series = store.attach_daily_returns(symbol)?;
    let data = serde_json::to_value(series)?;

    let mut result = CommandResult::ok(data);
    if series.len() < 2 {
        result = result.with_warning("fewer than two records; all returns are undefined");
    }
    Ok(result)
}
