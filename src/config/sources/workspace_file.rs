//! Workspace config file source: licaudit.toml in the working directory, or an explicit file.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use std::path::Path;

/// File name looked up in the working directory.
pub const WORKSPACE_CONFIG_FILE: &str = "licaudit.toml";

/// Add `licaudit.toml` from `workspace_root` to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if !path.exists() {
        return Ok(builder);
    }
    Ok(builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false)))
}

/// Add an explicitly requested config file. A missing file is an error.
pub fn add_explicit_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    Ok(builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(true)))
}
