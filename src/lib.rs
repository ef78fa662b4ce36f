#![forbid(unsafe_code)]

//! lintwrap: opinionated linter and formatter preset for JavaScript and TypeScript
//!
//! lintwrap composes a curated ESLint rule set out of bundled plugin rule
//! groups, scaffolds linter and formatter configuration into consumer
//! projects, and runs the host linter against the composed rule set.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod output;
pub mod rules;
pub mod setup;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, LintError, LintwrapError, SetupError};

// Re-export core domain types for convenient access
pub use types::{GlobPattern, ModuleFormat, RuleId, Severity};
