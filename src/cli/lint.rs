//! Lint command implementation
//!
//! This module implements the `lintwrap lint` command, which:
//! - Composes the rule set, applying consumer overrides
//! - Renders the configuration in the shape the installed linter understands
//! - Resolves the host linter binary (project-local install first)
//! - Spawns the linter with the rendered config, forwarding `--fix` and
//!   file patterns
//! - Propagates the linter's exit status

use crate::cli::args::ColorChoice;
use crate::cli::common::{EXIT_ERROR, compose_for};
use crate::error::LintError;
use crate::output::StatusPrinter;
use crate::setup::env::detect_linter_major;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Patterns linted when the caller gives none
const DEFAULT_PATTERN: &str = "**/*.{js,jsx,ts,tsx}";

/// Run the lint command
///
/// Returns the host linter's exit code on a completed run, or
/// [`EXIT_ERROR`] when the linter cannot be resolved or spawned.
pub fn run_lint(patterns: &[String], fix: bool, color: ColorChoice) -> i32 {
    match run_lint_inner(patterns, fix, color) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_lint_inner(patterns: &[String], fix: bool, color: ColorChoice) -> Result<i32, LintError> {
    let root = std::env::current_dir()?;
    let (registry, config) = compose_for(&root)?;
    let linter_major = detect_linter_major(&root);

    // Render the composed config where the linter can read it. The temp dir
    // must outlive the child process.
    let render_dir = tempfile::tempdir()?;
    let (config_path, lookup_flag) = if linter_major >= 9 {
        let path = render_dir.path().join("eslint.config.mjs");
        fs::write(&path, config.render_flat_module(&registry))?;
        (path, "--no-config-lookup")
    } else {
        let path = render_dir.path().join(".eslintrc.json");
        fs::write(&path, serde_json::to_string_pretty(&config.to_legacy_json())?)?;
        (path, "--no-eslintrc")
    };

    let binary = resolve_linter(&root);

    let mut printer = StatusPrinter::stderr(color.to_termcolor());
    printer.info(&format!(
        "Linting with composed rule set (linter v{})",
        linter_major
    ));

    let mut command = Command::new(&binary);
    command
        .current_dir(&root)
        .arg("--config")
        .arg(&config_path)
        .arg(lookup_flag);
    if fix {
        command.arg("--fix");
    }
    if patterns.is_empty() {
        command.arg(DEFAULT_PATTERN);
    } else {
        command.args(patterns);
    }

    let status = command.status().map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LintError::LinterNotFound(binary.display().to_string())
        } else {
            LintError::Spawn {
                binary: binary.clone(),
                source,
            }
        }
    })?;

    // A violation exit from the linter is a result, not an error
    Ok(status.code().unwrap_or(EXIT_ERROR))
}

/// Resolves the linter binary: project-local install first, then PATH
fn resolve_linter(root: &Path) -> PathBuf {
    let local = root.join("node_modules").join(".bin").join("eslint");
    if local.exists() {
        local
    } else {
        PathBuf::from("eslint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_linter_prefers_local_install() {
        let dir = TempDir::new().unwrap();
        let bin_dir = dir.path().join("node_modules").join(".bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("eslint"), "#!/bin/sh\n").unwrap();

        let resolved = resolve_linter(dir.path());
        assert_eq!(resolved, bin_dir.join("eslint"));
    }

    #[test]
    fn test_resolve_linter_falls_back_to_path() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_linter(dir.path());
        assert_eq!(resolved, PathBuf::from("eslint"));
    }
}
