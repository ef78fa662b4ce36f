#![forbid(unsafe_code)]

//! Embedded configuration templates
//!
//! Templates are compiled into the binary with `include_str!` so setup is
//! self-contained and copies them to the consumer filesystem verbatim.

use crate::setup::env::ConsumerEnvironment;
use crate::types::ModuleFormat;

/// Formatter configuration template
pub const PRETTIER_CONFIG: &str = include_str!("../../templates/prettierrc.json");

/// Formatter ignore-list template
pub const PRETTIER_IGNORE: &str = include_str!("../../templates/prettierignore.txt");

/// Flat (v9+) linter config stub
pub const FLAT_CONFIG: &str = include_str!("../../templates/eslint.config.js");

/// Legacy (pre-v9) linter config stub
pub const LEGACY_CONFIG: &str = include_str!("../../templates/eslintrc.cjs");

/// Target filenames in the consumer root
pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc";
pub const PRETTIER_IGNORE_FILE: &str = ".prettierignore";
pub const FLAT_CONFIG_FILE_ESM: &str = "eslint.config.js";
pub const FLAT_CONFIG_FILE_CJS: &str = "eslint.config.mjs";
pub const LEGACY_CONFIG_FILE: &str = ".eslintrc.cjs";

/// Selects the linter config filename and template for an environment
///
/// The flat stub is an ESM module, so CommonJS consumers get the `.mjs`
/// filename to force ESM parsing; ESM consumers can use the plain `.js`
/// name. Pre-v9 linters get the legacy `.eslintrc.cjs` stub regardless of
/// module format.
pub fn linter_config_target(environment: &ConsumerEnvironment) -> (&'static str, &'static str) {
    if environment.linter_major >= 9 {
        match environment.module_format {
            ModuleFormat::Esm => (FLAT_CONFIG_FILE_ESM, FLAT_CONFIG),
            ModuleFormat::CommonJs => (FLAT_CONFIG_FILE_CJS, FLAT_CONFIG),
        }
    } else {
        (LEGACY_CONFIG_FILE, LEGACY_CONFIG)
    }
}
