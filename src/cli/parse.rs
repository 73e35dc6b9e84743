//! CLI parse: clap types for licaudit-report. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Render dependency license audit results as JUnit XML and console tables
#[derive(Parser, Debug)]
#[command(name = "licaudit-report")]
#[command(version)]
#[command(about = "Render dependency license audit results as JUnit XML and console tables")]
pub struct Cli {
    /// Audit results JSON file ("-" reads standard input)
    #[arg(required_unless_present = "print_config")]
    pub results: Option<String>,

    /// JUnit report destination: a file path, or "-" for standard output
    #[arg(long, value_name = "PATH|-")]
    pub junit: Option<String>,

    /// Working directory used to look up licaudit.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides licaudit.toml lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not print the console summary tables
    #[arg(long)]
    pub no_summary: bool,

    /// Render tables with ASCII borders
    #[arg(long)]
    pub ascii: bool,

    /// Reject results where a dependency appears in more than one result set
    #[arg(long)]
    pub strict: bool,

    /// Exit with status 2 when any dependency failed the audit
    #[arg(long)]
    pub fail_on_failures: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log file path (logs go to stderr when unset)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
