//! Rules listing command implementation
//!
//! Composes the rule set (with consumer overrides applied), optionally
//! filters to one file category, and prints one row per rule in human or
//! JSONL form.

use crate::cli::args::{CategoryArg, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, compose_for};
use crate::compose::ComposedConfig;
use crate::error::ConfigError;
use crate::output::{RuleRow, RuleRowHumanFormatter, RuleRowJsonlFormatter};

/// Error type specific to the rules command
#[derive(Debug, thiserror::Error)]
enum RulesError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the rules command
pub fn run_rules(format: OutputFormat, category: Option<CategoryArg>) -> i32 {
    match run_rules_inner(format, category) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_rules_inner(format: OutputFormat, category: Option<CategoryArg>) -> Result<(), RulesError> {
    let root = std::env::current_dir()?;
    let (_registry, config) = compose_for(&root)?;

    let rows = build_rows(&config, category);

    match format {
        OutputFormat::Human => RuleRowHumanFormatter::new().write_to_stdout(&rows),
        OutputFormat::Jsonl => RuleRowJsonlFormatter::new().write_to_stdout(&rows),
    }

    Ok(())
}

/// Flattens the composed overrides into listing rows
fn build_rows(config: &ComposedConfig, category: Option<CategoryArg>) -> Vec<RuleRow> {
    let filter = category.map(CategoryArg::to_category);

    let mut rows = Vec::new();
    for o in &config.overrides {
        if filter.is_some_and(|wanted| wanted != o.category) {
            continue;
        }
        for (id, setting) in o.rules.iter() {
            rows.push(RuleRow {
                rule_id: id.to_string(),
                plugin: id.plugin().unwrap_or("core").to_string(),
                severity: setting.severity,
                has_options: setting.options.is_some(),
                category: o.category.as_str().to_string(),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{FileCategory, compose};
    use crate::rules::PluginRegistry;

    #[test]
    fn test_build_rows_covers_all_categories() {
        let config = compose(&PluginRegistry::builtin(), None);
        let rows = build_rows(&config, None);
        assert!(rows.iter().any(|r| r.category == "general"));
        assert!(rows.iter().any(|r| r.category == "typescript"));
        assert!(rows.iter().any(|r| r.category == "tests"));
    }

    #[test]
    fn test_build_rows_category_filter() {
        let config = compose(&PluginRegistry::builtin(), None);
        let rows = build_rows(&config, Some(CategoryArg::Tests));
        assert!(!rows.is_empty());
        assert!(
            rows.iter()
                .all(|r| r.category == FileCategory::Tests.as_str())
        );
        assert!(rows.iter().any(|r| r.rule_id == "jest/valid-expect"));
    }

    #[test]
    fn test_build_rows_marks_core_rules() {
        let config = compose(&PluginRegistry::builtin(), None);
        let rows = build_rows(&config, Some(CategoryArg::General));
        let camelcase = rows.iter().find(|r| r.rule_id == "camelcase").unwrap();
        assert_eq!(camelcase.plugin, "core");
        let react = rows.iter().find(|r| r.rule_id == "react/jsx-key").unwrap();
        assert_eq!(react.plugin, "react");
    }
}
