use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(&result.data)?,
    }

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(())
}

fn render_table(data: &Value) -> Result<(), CliError> {
    match data {
        Value::Object(map) => {
            let width = map.keys().map(String::len).max().unwrap_or(0);
            for (key, value) in map {
                match value {
                    Value::Object(_) | Value::Array(_) => {
                        println!("{key:width$}:");
                        let pretty = serde_json::to_string_pretty(value)?;
                        for line in pretty.lines() {
                            println!("  {line}");
                        }
                    }
                    other => println!("{key:width$}: {other}"),
                }
            }
        }
        other => {
            let pretty = serde_json::to_string_pretty(other)?;
            println!("{pretty}");
        }
    }

    Ok(())
}
