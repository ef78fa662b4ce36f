#![forbid(unsafe_code)]

//! Consumer environment detection
//!
//! Resolves which project the setup step should scaffold and what that
//! project looks like: its root directory, its module format, and the major
//! version of the installed linter. All detection is best-effort; missing or
//! unparsable manifests fall back to defaults and are never an error.
//!
//! Process state (working directory, environment variables) is captured
//! once into a [`SetupContext`] at the CLI boundary so that everything below
//! it is a deterministic function of its inputs.

use crate::error::SetupError;
use crate::types::ModuleFormat;
use serde_json::Value;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Environment variable carrying the install-time original working directory
///
/// Package managers run install hooks from inside the dependency directory;
/// this variable points back at the project the install was started from.
pub const INIT_CWD_VAR: &str = "INIT_CWD";

/// Linter major version assumed when detection fails
pub const DEFAULT_LINTER_MAJOR: u32 = 9;

/// Directory segment that marks execution from inside an installed dependency
const DEPENDENCY_DIR: &str = "node_modules";

/// Process state the setup step depends on, captured explicitly
#[derive(Debug, Clone)]
pub struct SetupContext {
    /// Working directory of the running process
    pub cwd: PathBuf,
    /// Install-time original working directory, when provided
    pub init_cwd: Option<PathBuf>,
}

impl SetupContext {
    pub fn new(cwd: PathBuf, init_cwd: Option<PathBuf>) -> Self {
        SetupContext { cwd, init_cwd }
    }

    /// Captures the real process environment
    ///
    /// # Errors
    ///
    /// Returns `SetupError::CurrentDir` if the working directory cannot be
    /// determined; this is the only fatal setup condition.
    pub fn from_env() -> Result<Self, SetupError> {
        let cwd = env::current_dir().map_err(SetupError::CurrentDir)?;
        let init_cwd = env::var_os(INIT_CWD_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Ok(SetupContext::new(cwd, init_cwd))
    }

    /// Resolves the consumer project root
    ///
    /// Preference order: the install-time original working directory; two
    /// levels above the working directory when running from inside the
    /// dependency directory; the working directory itself.
    pub fn consumer_root(&self) -> PathBuf {
        if let Some(init_cwd) = &self.init_cwd {
            return init_cwd.clone();
        }

        let inside_dependency = self
            .cwd
            .components()
            .any(|component| component == Component::Normal(OsStr::new(DEPENDENCY_DIR)));
        if inside_dependency {
            self.cwd.join("..").join("..")
        } else {
            self.cwd.clone()
        }
    }
}

/// Detected facts about the consumer project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumerEnvironment {
    pub module_format: ModuleFormat,
    pub linter_major: u32,
}

/// Detects the consumer environment at the given root
pub fn detect(root: &Path) -> ConsumerEnvironment {
    ConsumerEnvironment {
        module_format: detect_module_format(root),
        linter_major: detect_linter_major(root),
    }
}

/// Detects the consumer's module format from its package manifest
///
/// ESM iff `package.json` has `"type": "module"`; anything else, including
/// a missing or malformed manifest, is CommonJS.
pub fn detect_module_format(root: &Path) -> ModuleFormat {
    let manifest = read_json(&root.join("package.json"));
    let is_esm = manifest
        .as_ref()
        .and_then(|value| value.get("type"))
        .and_then(Value::as_str)
        == Some("module");
    if is_esm {
        ModuleFormat::Esm
    } else {
        ModuleFormat::CommonJs
    }
}

/// Detects the installed linter's major version
///
/// Reads the linter's own manifest under the consumer's dependency
/// directory and parses the leading integer of its version string. Falls
/// back to [`DEFAULT_LINTER_MAJOR`] on any failure.
pub fn detect_linter_major(root: &Path) -> u32 {
    let manifest_path = root.join(DEPENDENCY_DIR).join("eslint").join("package.json");
    read_json(&manifest_path)
        .as_ref()
        .and_then(|value| value.get("version"))
        .and_then(Value::as_str)
        .and_then(leading_major)
        .unwrap_or(DEFAULT_LINTER_MAJOR)
}

fn leading_major(version: &str) -> Option<u32> {
    version.split('.').next()?.trim().parse().ok()
}

/// Reads and parses a JSON file, returning None on any failure
fn read_json(path: &Path) -> Option<Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
