//! CLI argument parsing using clap

use crate::compose::FileCategory;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Config shape emitted by print-config
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigStyle {
    /// Follow the detected linter version
    Auto,
    /// Flat config (linter v9 and later)
    Flat,
    /// Legacy config (before v9)
    Legacy,
}

/// Rendering for print-config
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Pretty-printed JSON
    Json,
    /// JavaScript module text
    Js,
}

/// Category filter for the rules listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    General,
    Typescript,
    Tests,
}

impl CategoryArg {
    pub fn to_category(self) -> FileCategory {
        match self {
            CategoryArg::General => FileCategory::General,
            CategoryArg::Typescript => FileCategory::TypeScript,
            CategoryArg::Tests => FileCategory::Tests,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if the terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Resolves to a termcolor choice, honoring NO_COLOR and terminal detection
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto => {
                if std::env::var_os("NO_COLOR").is_some() || !std::io::stderr().is_terminal() {
                    termcolor::ColorChoice::Never
                } else {
                    termcolor::ColorChoice::Auto
                }
            }
        }
    }
}

/// lintwrap CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "lintwrap")]
#[command(about = "Opinionated ESLint and Prettier preset for JavaScript and TypeScript projects")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available lintwrap subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write linter and formatter config files into the consumer project
    Setup {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Run the host linter with the composed rule set
    Lint {
        /// File patterns to lint (defaults to all JS/TS sources)
        patterns: Vec<String>,

        /// Let the linter fix what it can
        #[arg(long)]
        fix: bool,
    },

    /// List the composed rules
    Rules {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Only list one file category
        #[arg(long)]
        category: Option<CategoryArg>,
    },

    /// Print the composed configuration
    PrintConfig {
        /// Config shape to emit
        #[arg(long, default_value = "auto")]
        style: ConfigStyle,

        /// Output rendering
        #[arg(short, long, default_value = "json")]
        format: RenderFormat,
    },
}
