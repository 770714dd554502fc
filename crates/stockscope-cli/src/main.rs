use clap::Parser;
use std::process::ExitCode;

use stockscope_cli::cli::Cli;
use stockscope_cli::error::CliError;
use stockscope_cli::{commands, output};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let result = commands::run(&cli).await?;
    output::render(&result, cli.format, cli.pretty)
}
