//! Output formatting: status lines and rule listings

pub mod rule_status;
pub mod status;

// Re-export types for convenient access
pub use rule_status::{RuleRow, RuleRowHumanFormatter, RuleRowJsonlFormatter};
pub use status::StatusPrinter;
