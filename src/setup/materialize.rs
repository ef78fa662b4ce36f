#![forbid(unsafe_code)]

//! The setup materializer
//!
//! One-shot, linear, idempotent scaffolding of config files into a consumer
//! project: detect the environment, then check-then-write each target file.
//! Every per-file failure is absorbed into the report; setup is best-effort
//! and must never fail an enclosing package install.
//!
//! The existence check and the write are not atomic. Two racing installs can
//! both write a file, but the content is identical either way, so the race
//! is benign and left uncoordinated.

use crate::output::status::StatusPrinter;
use crate::setup::env::{self, SetupContext};
use crate::setup::templates;
use std::fs;
use std::path::Path;

/// Options for a setup run
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupOptions {
    /// Overwrite existing files instead of skipping them
    pub force: bool,
}

/// Outcome of a setup run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were overwritten (force runs only)
    pub overwritten: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files whose write failed
    pub failed: Vec<String>,
}

impl SetupReport {
    fn new() -> Self {
        SetupReport::default()
    }

    /// Aggregate success: no file failed
    ///
    /// Skipped files count as success; an already-configured project is a
    /// successfully set-up project.
    pub fn success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs the setup materializer
///
/// Prints a colored status line per step and returns the per-file report.
/// This function does not return `Err`; recoverable conditions become
/// defaults or report entries.
pub fn run(ctx: &SetupContext, options: &SetupOptions, printer: &mut StatusPrinter) -> SetupReport {
    let root = ctx.consumer_root();
    printer.info(&format!("Consumer root: {}", root.display()));

    let environment = env::detect(&root);
    printer.info(&format!("Package type: {}", environment.module_format));
    printer.info(&format!("Linter version: {}", environment.linter_major));

    let (linter_file, linter_content) = templates::linter_config_target(&environment);

    let mut report = SetupReport::new();
    let targets: [(&str, &str); 3] = [
        (linter_file, linter_content),
        (templates::PRETTIER_CONFIG_FILE, templates::PRETTIER_CONFIG),
        (templates::PRETTIER_IGNORE_FILE, templates::PRETTIER_IGNORE),
    ];
    for (name, content) in targets {
        materialize_file(&root, name, content, options.force, printer, &mut report);
    }

    report
}

/// Check-then-write a single target file
fn materialize_file(
    root: &Path,
    name: &str,
    content: &str,
    force: bool,
    printer: &mut StatusPrinter,
    report: &mut SetupReport,
) {
    let path = root.join(name);
    let exists = path.exists();

    if exists && !force {
        printer.info(&format!("{} already exists, skipping", name));
        report.skipped.push(name.to_string());
        return;
    }

    match write_file(&path, content) {
        Ok(()) => {
            if exists {
                printer.success(&format!("Overwrote {}", name));
                report.overwritten.push(name.to_string());
            } else {
                printer.success(&format!("Created {}", name));
                report.created.push(name.to_string());
            }
        }
        Err(e) => {
            printer.error(&format!("Failed to create {}: {}", name, e));
            report.failed.push(name.to_string());
        }
    }
}

/// Writes a file, creating parent directories as needed
fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use termcolor::ColorChoice;

    fn quiet_printer() -> StatusPrinter {
        StatusPrinter::stderr(ColorChoice::Never)
    }

    fn context_for(root: &Path) -> SetupContext {
        SetupContext::new(root.to_path_buf(), None)
    }

    #[test]
    fn test_empty_root_creates_exactly_three_files() {
        let dir = TempDir::new().unwrap();
        let report = run(
            &context_for(dir.path()),
            &SetupOptions::default(),
            &mut quiet_printer(),
        );

        assert_eq!(report.created.len(), 3);
        assert!(report.skipped.is_empty());
        assert!(report.overwritten.is_empty());
        assert!(report.success());

        // No linter manifest present, so the default (v9, CommonJS) applies
        assert!(dir.path().join("eslint.config.mjs").exists());
        assert!(dir.path().join(".prettierrc").exists());
        assert!(dir.path().join(".prettierignore").exists());
    }

    #[test]
    fn test_esm_consumer_gets_plain_js_config_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "type": "module" }"#).unwrap();

        let report = run(
            &context_for(dir.path()),
            &SetupOptions::default(),
            &mut quiet_printer(),
        );

        assert!(report.created.contains(&"eslint.config.js".to_string()));
        assert!(dir.path().join("eslint.config.js").exists());
    }

    #[test]
    fn test_old_linter_gets_legacy_config() {
        let dir = TempDir::new().unwrap();
        let eslint_dir = dir.path().join("node_modules").join("eslint");
        fs::create_dir_all(&eslint_dir).unwrap();
        fs::write(eslint_dir.join("package.json"), r#"{ "version": "8.57.0" }"#).unwrap();

        let report = run(
            &context_for(dir.path()),
            &SetupOptions::default(),
            &mut quiet_printer(),
        );

        assert!(report.created.contains(&".eslintrc.cjs".to_string()));
        let content = fs::read_to_string(dir.path().join(".eslintrc.cjs")).unwrap();
        assert!(content.contains("lintwrap/legacy"));
    }

    #[test]
    fn test_second_run_skips_everything() {
        let dir = TempDir::new().unwrap();
        let ctx = context_for(dir.path());
        let options = SetupOptions::default();

        let first = run(&ctx, &options, &mut quiet_printer());
        assert_eq!(first.created.len(), 3);

        let second = run(&ctx, &options, &mut quiet_printer());
        assert!(second.created.is_empty());
        assert_eq!(second.skipped.len(), 3);
        assert!(second.success());
    }

    #[test]
    fn test_existing_formatter_config_is_preserved_byte_for_byte() {
        let dir = TempDir::new().unwrap();
        let existing = "{ \"semi\": true }\n";
        fs::write(dir.path().join(".prettierrc"), existing).unwrap();

        let report = run(
            &context_for(dir.path()),
            &SetupOptions::default(),
            &mut quiet_printer(),
        );

        assert!(report.skipped.contains(&".prettierrc".to_string()));
        assert!(report.success());
        let content = fs::read_to_string(dir.path().join(".prettierrc")).unwrap();
        assert_eq!(content, existing);
    }

    #[test]
    fn test_force_overwrites_and_is_byte_identical_across_runs() {
        let dir = TempDir::new().unwrap();
        let ctx = context_for(dir.path());
        let options = SetupOptions { force: true };

        run(&ctx, &options, &mut quiet_printer());
        let first = fs::read_to_string(dir.path().join(".prettierrc")).unwrap();

        fs::write(dir.path().join(".prettierrc"), "tampered").unwrap();
        let report = run(&ctx, &options, &mut quiet_printer());
        assert!(report.overwritten.contains(&".prettierrc".to_string()));

        let second = fs::read_to_string(dir.path().join(".prettierrc")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_failure_is_reported_not_thrown() {
        let dir = TempDir::new().unwrap();
        // A directory standing where the file should go makes the write fail
        fs::create_dir(dir.path().join(".prettierrc")).unwrap();

        let report = run(
            &context_for(dir.path()),
            &SetupOptions { force: true },
            &mut quiet_printer(),
        );

        assert!(report.failed.contains(&".prettierrc".to_string()));
        assert!(!report.success());
        // The other files still materialize
        assert!(report.created.contains(&".prettierignore".to_string()));
    }

    #[test]
    fn test_missing_consumer_root_is_created() {
        let dir = TempDir::new().unwrap();
        let nested: PathBuf = dir.path().join("packages").join("app");
        let report = run(
            &context_for(&nested),
            &SetupOptions::default(),
            &mut quiet_printer(),
        );

        assert!(report.success());
        assert!(nested.join(".prettierrc").exists());
    }

    #[test]
    fn test_init_cwd_in_context_redirects_the_run() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("project");
        fs::create_dir_all(project.join("node_modules").join("lintwrap")).unwrap();

        let ctx = SetupContext::new(
            project.join("node_modules").join("lintwrap"),
            Some(project.clone()),
        );
        let report = run(&ctx, &SetupOptions::default(), &mut quiet_printer());

        assert!(report.success());
        assert!(project.join(".prettierrc").exists());
        assert!(!project.join("node_modules").join("lintwrap").join(".prettierrc").exists());
    }
}
