//! Error types for lintwrap
//!
//! This module defines the error types used throughout lintwrap, following
//! a hierarchical structure with specific error variants for different
//! error categories. Recoverable conditions inside the setup materializer
//! are absorbed locally and reported as flags, not as these errors.

use std::path::PathBuf;

/// Errors from loading consumer overrides (lintwrap.toml)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the overrides file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax
    #[error("Invalid overrides syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Structurally valid but semantically invalid configuration
    #[error("Invalid overrides value: {0}")]
    Validation(String),
}

/// Fatal setup errors
///
/// Per-file write failures are not represented here; they are absorbed into
/// the setup report. Only conditions that prevent setup from starting at
/// all are fatal.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The working directory could not be determined
    #[error("cannot determine working directory: {0}")]
    CurrentDir(std::io::Error),
}

/// Errors from the lint runner
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The host linter binary could not be found
    #[error("linter binary not found (looked for {0}); is eslint installed?")]
    LinterNotFound(String),

    /// The linter process could not be spawned or waited on
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: PathBuf,
        source: std::io::Error,
    },

    /// The rendered configuration could not be written
    #[error("failed to write rendered config: {0}")]
    Io(#[from] std::io::Error),

    /// Consumer overrides were present but invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The composed configuration could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level error type for lintwrap
#[derive(Debug, thiserror::Error)]
pub enum LintwrapError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Setup error
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    /// Lint runner error
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
