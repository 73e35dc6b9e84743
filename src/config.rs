//! Configuration System
//!
//! Layered configuration for report runs: defaults, a user config file, a workspace
//! `licaudit.toml` (or an explicit `--config` file) and `LICAUDIT_*` environment
//! variables, merged with the `config` crate.

use crate::error::ReportError;
use crate::logging::LoggingConfig;
use crate::report::{JUnitOptions, ReportDestination, TableStyle, SUITE_NAME};
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// JUnit output path, `-` for stdout. No JUnit report when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,

    /// Print the console summary tables
    #[serde(default = "default_true")]
    pub summary: bool,

    #[serde(default)]
    pub table_style: TableStyle,

    /// Reject snapshots where a dependency appears in more than one result set
    #[serde(default)]
    pub strict_partition: bool,

    /// Exit with a distinct status when any dependency failed
    #[serde(default)]
    pub fail_on_failures: bool,

    #[serde(default = "default_suite_name")]
    pub suite_name: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}

fn default_suite_name() -> String {
    SUITE_NAME.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: None,
            summary: default_true(),
            table_style: TableStyle::default(),
            strict_partition: false,
            fail_on_failures: false,
            suite_name: default_suite_name(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn destination(&self) -> ReportDestination {
        ReportDestination::from_arg(self.output_file.as_deref())
    }

    pub fn junit_options(&self) -> JUnitOptions {
        JUnitOptions::default().with_suite_name(self.suite_name.clone())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.suite_name.trim().is_empty() {
            return Err(ReportError::Config(
                "suite_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String, ReportError> {
        toml::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize config: {}", e)))
    }
}
