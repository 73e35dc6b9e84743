//! Licaudit Report CLI Binary
//!
//! Command-line interface for rendering dependency license audit results.

use anyhow::Context;
use clap::Parser;
use licaudit_report::cli::{exit_code, map_error, Cli, RunContext, EXIT_ERROR};
use licaudit_report::logging::init_logging;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = init_logging(Some(&context.logging_config(&cli))) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    match run(&cli, &context) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("Report run failed: {:#}", e);
            eprintln!("{:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli, context: &RunContext) -> anyhow::Result<u8> {
    info!("Licaudit report starting");

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let outcome = context
        .execute(cli, std::io::stdin().lock(), &mut stdout)
        .map_err(|e| anyhow::anyhow!(map_error(&e)))
        .with_context(|| match cli.results.as_deref() {
            Some(results) => format!("Failed to report audit results from {}", results),
            None => "Failed to print configuration".to_string(),
        })?;

    info!(
        passed = outcome.passed,
        failed = outcome.failed,
        ignored = outcome.ignored,
        "Report run completed"
    );
    Ok(exit_code(&outcome, context.config().fail_on_failures))
}
