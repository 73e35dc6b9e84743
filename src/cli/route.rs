//! CLI route: run context and the single report run. Dispatches to the report emitters.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, ReportConfig};
use crate::error::ReportError;
use crate::logging::LoggingConfig;
use crate::model::LicenseResults;
use crate::report::{self, TableStyle};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Reads audit results from standard input instead of a file
const STDIN_SENTINEL: &str = "-";

/// Counts from a completed report run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
}

/// Runtime context for CLI execution: the effective configuration with CLI
/// overrides applied.
pub struct RunContext {
    config: ReportConfig,
}

impl RunContext {
    /// Load configuration for `cli` and apply its flags on top.
    pub fn new(cli: &Cli) -> Result<Self, ReportError> {
        let config = match cli.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&cli.workspace)?,
        };
        let config = apply_overrides(config, cli);
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_config(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Logging configuration with CLI flags applied.
    /// Precedence: CLI flags override config file override defaults.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if cli.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(ref level) = cli.log_level {
            logging.level = level.clone();
        }
        if let Some(ref format) = cli.log_format {
            logging.format = format.clone();
        }
        if let Some(ref file) = cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Execute a report run.
    ///
    /// Prints the console summary (unless disabled) and then writes the JUnit
    /// report to the configured destination. Without a results argument only
    /// `--print-config` is valid.
    pub fn execute<R: Read, W: Write>(
        &self,
        cli: &Cli,
        stdin: R,
        stdout: &mut W,
    ) -> Result<RunOutcome, ReportError> {
        if cli.print_config {
            let text = self.config.to_toml_string()?;
            stdout
                .write_all(text.as_bytes())
                .map_err(ReportError::SinkWrite)?;
            return Ok(RunOutcome {
                passed: 0,
                failed: 0,
                ignored: 0,
            });
        }

        let results = match cli.results.as_deref() {
            Some(STDIN_SENTINEL) => LicenseResults::from_reader(stdin)?,
            Some(path) => LicenseResults::from_path(Path::new(path))?,
            None => {
                return Err(ReportError::Snapshot(
                    "no audit results given".to_string(),
                ))
            }
        };

        self.report(&results, stdout)
    }

    /// Emit both reports for an already loaded snapshot.
    pub fn report<W: Write>(
        &self,
        results: &LicenseResults,
        stdout: &mut W,
    ) -> Result<RunOutcome, ReportError> {
        report::check_partition(results, self.config.strict_partition)?;

        let (passed, failed, ignored) = results.counts();
        info!(passed, failed, ignored, "Loaded audit results");

        if self.config.summary {
            report::print_summary(results, stdout, self.config.table_style)?;
        } else {
            debug!("Console summary disabled");
        }

        let destination = self.config.destination();
        report::write_junit_report_with(
            results,
            &destination,
            stdout,
            &self.config.junit_options(),
        )?;

        Ok(RunOutcome {
            passed,
            failed,
            ignored,
        })
    }
}

fn apply_overrides(mut config: ReportConfig, cli: &Cli) -> ReportConfig {
    if let Some(ref junit) = cli.junit {
        config.output_file = Some(junit.clone());
    }
    if cli.no_summary {
        config.summary = false;
    }
    if cli.ascii {
        config.table_style = TableStyle::Ascii;
    }
    if cli.strict {
        config.strict_partition = true;
    }
    if cli.fail_on_failures {
        config.fail_on_failures = true;
    }
    config
}
