use stockscope_analytics::{SeriesStore, SmaWindows};
use stockscope_core::Symbol;

use crate::cli::SmaArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn run(
    args: &SmaArgs,
    store: &mut SeriesStore,
    symbol: &Symbol,
) -> Result<CommandResult, CliError> {
    let windows = SmaWindows::new(args.short, args.long)?;
    let series = store.attach_moving_averages(symbol, windows)?;
    let data = serde_json::to_value(series)?;
    Ok(CommandResult::ok(data))
}
