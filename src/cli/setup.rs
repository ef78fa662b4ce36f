//! Setup command implementation
//!
//! Captures the process environment into a [`SetupContext`], runs the
//! materializer, and prints a summary. Partial failure exits 0: setup is
//! best-effort and runs from package-install hooks that must not be failed
//! by a missing permission or a read-only checkout. Only a process whose
//! working directory cannot be determined exits non-zero.

use crate::cli::args::ColorChoice;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::output::StatusPrinter;
use crate::setup::SetupContext;
use crate::setup::materialize::{self, SetupOptions};

/// Run the setup command
pub fn run_setup(force: bool, color: ColorChoice) -> i32 {
    let mut printer = StatusPrinter::stderr(color.to_termcolor());

    let ctx = match SetupContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            printer.error(&format!("Error: {}", e));
            return EXIT_ERROR;
        }
    };

    printer.info("lintwrap setup");
    let report = materialize::run(&ctx, &SetupOptions { force }, &mut printer);

    printer.plain("");
    if report.success() {
        printer.success("Setup complete. Reload your editor for changes to take effect.");
    } else {
        printer.warn("Setup completed with warnings. Check the output above.");
    }

    EXIT_SUCCESS
}
