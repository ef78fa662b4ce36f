#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! This module provides formatters for displaying the composed rule set
//! from the `lintwrap rules` command. It supports both human-readable and
//! JSONL output formats.

use crate::types::Severity;
use serde::Serialize;

/// One row of the rules listing
#[derive(Debug, Clone)]
pub struct RuleRow {
    pub rule_id: String,
    pub plugin: String,
    pub severity: Severity,
    pub has_options: bool,
    pub category: String,
}

/// Human-readable formatter for the rules listing
pub struct RuleRowHumanFormatter;

impl RuleRowHumanFormatter {
    pub fn new() -> Self {
        RuleRowHumanFormatter
    }

    /// Format rows for human consumption, grouped by category
    pub fn format(&self, rows: &[RuleRow]) -> String {
        let mut output = String::new();
        output.push_str(&format!("Rules ({} composed):\n", rows.len()));

        let mut current_category: Option<&str> = None;
        for row in rows {
            if current_category != Some(row.category.as_str()) {
                output.push_str(&format!("\n[{}]\n", row.category));
                current_category = Some(row.category.as_str());
            }
            let options_marker = if row.has_options { " [options]" } else { "" };
            output.push_str(&format!(
                "  {:<5} {} ({}){}\n",
                row.severity.as_str(),
                row.rule_id,
                row.plugin,
                options_marker
            ));
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rows: &[RuleRow]) {
        print!("{}", self.format(rows));
    }
}

impl Default for RuleRowHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a rule row
#[derive(Debug, Serialize)]
struct JsonlRuleRow<'a> {
    rule_id: &'a str,
    plugin: &'a str,
    severity: &'a str,
    has_options: bool,
    category: &'a str,
}

/// JSONL formatter for the rules listing
pub struct RuleRowJsonlFormatter;

impl RuleRowJsonlFormatter {
    pub fn new() -> Self {
        RuleRowJsonlFormatter
    }

    /// Format rows as JSONL, one JSON object per line
    pub fn format(&self, rows: &[RuleRow]) -> String {
        let mut output = String::new();
        for row in rows {
            let jsonl_row = JsonlRuleRow {
                rule_id: &row.rule_id,
                plugin: &row.plugin,
                severity: row.severity.as_str(),
                has_options: row.has_options,
                category: &row.category,
            };
            match serde_json::to_string(&jsonl_row) {
                Ok(line) => {
                    output.push_str(&line);
                    output.push('\n');
                }
                Err(e) => {
                    eprintln!("Error serializing rule row: {}", e);
                }
            }
        }
        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rows: &[RuleRow]) {
        print!("{}", self.format(rows));
    }
}

impl Default for RuleRowJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
