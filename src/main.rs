//! lintwrap CLI entry point

use clap::Parser;
use lintwrap::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Setup { force } => lintwrap::cli::setup::run_setup(force, cli.color),
        Command::Lint { patterns, fix } => lintwrap::cli::lint::run_lint(&patterns, fix, cli.color),
        Command::Rules { format, category } => lintwrap::cli::rules::run_rules(format, category),
        Command::PrintConfig { style, format } => lintwrap::cli::print::run_print(style, format),
    };

    process::exit(exit_code);
}
