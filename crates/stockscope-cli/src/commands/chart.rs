use std::str::FromStr;

use stockscope_analytics::{SeriesStore, SmaWindows};
use stockscope_charts::{ChartKind, ChartRenderer, FigureSpec, JsonRenderer};
use stockscope_core::Symbol;

use crate::cli::ChartArgs;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn run(
    args: &ChartArgs,
    store: &SeriesStore,
    symbol: &Symbol,
) -> Result<CommandResult, CliError> {
    let kind = ChartKind::from_str(&args.kind)?;
    let windows = SmaWindows::new(args.short, args.long)?;

    let series = store.series(symbol)?;
    let figure = FigureSpec::build(series, kind, windows)?;

    // The renderer output is the deliverable here; keep it verbatim so a
    // drawing backend can consume it unchanged.
    let rendered = JsonRenderer::new().render(&figure)?;
    let data = serde_json::from_str(&rendered)?;

    Ok(CommandResult::ok(data))
}
