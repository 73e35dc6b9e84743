//! Environment source: LICAUDIT_* variables, `__` separates nested keys.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "LICAUDIT";

/// Add environment overrides, e.g. `LICAUDIT_OUTPUT_FILE=-` or `LICAUDIT_LOGGING__LEVEL=debug`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
