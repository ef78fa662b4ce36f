//! Common helper functions shared across CLI commands

use crate::compose::{self, ComposedConfig};
use crate::config::overrides::OverridesConfig;
use crate::error::ConfigError;
use crate::rules::PluginRegistry;
use std::path::Path;

/// Exit codes
///
/// Partial setup failure exits with success: a best-effort scaffold must
/// not fail an enclosing package install.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Composes the preset for a consumer root, applying lintwrap.toml overrides
/// when present
///
/// # Errors
///
/// Returns `ConfigError` if an overrides file exists but cannot be read or
/// parsed. A missing overrides file is not an error.
pub(crate) fn compose_for(root: &Path) -> Result<(PluginRegistry, ComposedConfig), ConfigError> {
    let registry = PluginRegistry::builtin();
    let consumer = OverridesConfig::load_if_present(root)?;
    let config = compose::compose(&registry, consumer.as_ref());
    Ok((registry, config))
}
