//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod lint;
pub mod print;
pub mod rules;
pub mod setup;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, ConfigStyle, OutputFormat, RenderFormat};
