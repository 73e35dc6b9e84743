//! Config loading facade: assembles sources in merge order and deserializes.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::ReportConfig;
use config::ConfigError;
use std::path::Path;

/// Loads [`ReportConfig`] from defaults, config files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run in `workspace_root`.
    ///
    /// Precedence (lowest to highest): defaults, user config file,
    /// `licaudit.toml` in `workspace_root`, `LICAUDIT_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<ReportConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from an explicit file, replacing the workspace file lookup.
    pub fn load_from_file(path: &Path) -> Result<ReportConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_explicit_to_builder(builder, path)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Defaults only, no files or environment.
    pub fn defaults() -> Result<ReportConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()
    }
}
