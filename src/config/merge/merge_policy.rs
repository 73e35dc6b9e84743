//! Merge rules: defaults and override order.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Sources added afterwards override in the order they are added: user file,
/// workspace or explicit file, then environment.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("summary", true)?
        .set_default("table_style", "utf8")?
        .set_default("strict_partition", false)?
        .set_default("fail_on_failures", false)?
        .set_default("suite_name", crate::report::SUITE_NAME)
}
