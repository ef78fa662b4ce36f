#![forbid(unsafe_code)]

//! Parsing and validation for lintwrap.toml consumer overrides
//!
//! A consumer project may place a `lintwrap.toml` next to its manifest to
//! retune the composed preset without forking it:
//!
//! ```toml
//! ignores = ["generated/**"]
//!
//! [rules]
//! "camelcase" = false
//! "no-undef" = "error"
//! "unicorn/no-empty-file" = { severity = "error" }
//! "complexity" = { severity = "warn", options = { max = 15 } }
//! ```
//!
//! Overrides merge last onto every category table, so they win over both the
//! plugin contributions and the bundled rule groups.

use crate::error::ConfigError;
use crate::rules::table::{RuleSetting, RuleTable};
use crate::types::{GlobPattern, RuleId, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File name looked up in the consumer root
pub const OVERRIDES_FILE_NAME: &str = "lintwrap.toml";

/// Parsed consumer overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverridesConfig {
    /// Per-rule overrides
    #[serde(default)]
    pub rules: BTreeMap<RuleId, RuleOverride>,

    /// Extra ignore patterns appended to the composed ignore list
    #[serde(default)]
    pub ignores: Vec<GlobPattern>,
}

/// A rule override: a boolean, a bare severity, or a settings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleOverride {
    /// `false` disables the rule; `true` (re-)enables it
    Enabled(bool),
    /// Bare severity token, keeping any composed options
    Severity(Severity),
    /// Full settings table
    Detailed(RuleOverrideSettings),
}

/// Settings form of a rule override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOverrideSettings {
    /// Severity for this rule
    pub severity: Severity,

    /// Options value; when absent, composed options are kept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

impl OverridesConfig {
    /// Loads overrides from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses overrides from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: OverridesConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `lintwrap.toml` from the given root if it exists
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load_if_present(root: &Path) -> Result<Option<Self>, ConfigError> {
        let path = root.join(OVERRIDES_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::load(path)?))
    }

    /// Validates the configuration
    ///
    /// Rule ids pass through unvalidated (unknown rules are the linter's
    /// business); ignore globs must compile.
    fn validate(&self) -> Result<(), ConfigError> {
        for pattern in &self.ignores {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid ignore glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Applies the rule overrides to a composed table, last-write-wins
    ///
    /// - `false` turns the rule off.
    /// - `true` enables the rule: a rule composed as `off` (or absent)
    ///   becomes `error`; an already-active rule is left as composed.
    /// - A bare severity retunes the rule, keeping composed options.
    /// - A settings table sets severity and, when given, replaces options.
    pub fn apply(&self, table: &mut RuleTable) {
        for (id, value) in &self.rules {
            let existing = table.get(id).cloned();
            let setting = match value {
                RuleOverride::Enabled(false) => RuleSetting::off(),
                RuleOverride::Enabled(true) => match existing {
                    Some(setting) if setting.severity != Severity::Off => setting,
                    Some(mut setting) => {
                        setting.severity = Severity::Error;
                        setting
                    }
                    None => RuleSetting::error(),
                },
                RuleOverride::Severity(severity) => match existing {
                    Some(mut setting) => {
                        setting.severity = *severity;
                        setting
                    }
                    None => RuleSetting::new(*severity),
                },
                RuleOverride::Detailed(detailed) => RuleSetting {
                    severity: detailed.severity,
                    options: detailed
                        .options
                        .clone()
                        .or_else(|| existing.and_then(|s| s.options)),
                },
            };
            table.set(id.clone(), setting);
        }
    }
}
