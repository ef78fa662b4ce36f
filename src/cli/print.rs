//! Print-config command implementation
//!
//! Emits the composed configuration on stdout. The `auto` style follows the
//! linter major version detected in the current directory, so consumers see
//! the same shape setup would scaffold for them.

use crate::cli::args::{ConfigStyle, RenderFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, compose_for};
use crate::error::ConfigError;
use crate::setup::env::detect_linter_major;

/// Error type specific to the print-config command
#[derive(Debug, thiserror::Error)]
enum PrintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Run the print-config command
pub fn run_print(style: ConfigStyle, format: RenderFormat) -> i32 {
    match run_print_inner(style, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_print_inner(style: ConfigStyle, format: RenderFormat) -> Result<(), PrintError> {
    let root = std::env::current_dir()?;
    let (registry, config) = compose_for(&root)?;

    let flat = match style {
        ConfigStyle::Flat => true,
        ConfigStyle::Legacy => false,
        ConfigStyle::Auto => detect_linter_major(&root) >= 9,
    };

    let text = match (flat, format) {
        (true, RenderFormat::Json) => {
            serde_json::to_string_pretty(&config.to_flat_json(&registry))?
        }
        (true, RenderFormat::Js) => config.render_flat_module(&registry),
        (false, RenderFormat::Json) => serde_json::to_string_pretty(&config.to_legacy_json())?,
        (false, RenderFormat::Js) => config.render_legacy_module(),
    };

    println!("{}", text.trim_end());
    Ok(())
}
