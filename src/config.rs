//! Consumer-facing configuration

pub mod overrides;

// Re-export types for convenient access
pub use overrides::{OverridesConfig, RuleOverride};
