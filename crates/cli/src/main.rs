//! jobxml: generate CI server job documents from job definitions.

mod cli;
mod commands;
mod config;
mod errors;
mod tracing;

use std::process::ExitCode;

use crate::cli::{Cli, parse};
use crate::commands::Command;
use crate::tracing::TracingConfig;

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    let cli = parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> miette::Result<()> {
    crate::tracing::init_tracing(TracingConfig {
        format: cli.tracing_format(),
        level: cli.level.into(),
        ..TracingConfig::default()
    })?;

    let command: Command = cli.command.into();
    commands::execute(command)?;
    Ok(())
}
