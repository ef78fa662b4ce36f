#![forbid(unsafe_code)]

//! Core domain types for lintwrap
//!
//! This module defines the fundamental types used throughout the lintwrap system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule severity levels, matching the host linter's severity tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Returns the severity as the linter's severity token
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A plugin-namespaced rule identifier
///
/// Rule IDs follow the host linter's convention: core rules are bare names
/// (`camelcase`), plugin rules carry their plugin prefix before the first
/// slash (`react/prop-types`, `@typescript-eslint/no-unused-vars`).
///
/// IDs are carried through unchanged; rule names are not validated against
/// any rule catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId
    pub fn new(id: impl Into<String>) -> Self {
        RuleId(id.into())
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the plugin prefix, if this is a plugin-namespaced rule
    ///
    /// `react/prop-types` yields `react`; core rules like `camelcase` yield None.
    pub fn plugin(&self) -> Option<&str> {
        self.0.split_once('/').map(|(prefix, _)| prefix)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        RuleId(id.to_string())
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        RuleId(id)
    }
}

/// A glob pattern for file matching
///
/// This is a simple wrapper around a string in the host linter's glob
/// dialect. Patterns destined for lintwrap's own configuration are compiled
/// with the `globset` crate at load time; patterns handed to the linter are
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GlobPattern {
    fn from(pattern: String) -> Self {
        GlobPattern(pattern)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}

/// Module format of a consumer package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    CommonJs,
    Esm,
}

impl ModuleFormat {
    pub fn is_esm(&self) -> bool {
        matches!(self, ModuleFormat::Esm)
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleFormat::CommonJs => write!(f, "CommonJS"),
            ModuleFormat::Esm => write!(f, "ESM"),
        }
    }
}
