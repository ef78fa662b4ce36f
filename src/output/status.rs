#![forbid(unsafe_code)]

//! Colored status lines for interactive commands
//!
//! All status output goes to stderr so stdout stays clean for machine
//! formats. Write failures while printing status are ignored; status output
//! must never fail a command.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Printer for per-step status lines
pub struct StatusPrinter {
    stream: StandardStream,
}

impl StatusPrinter {
    /// Creates a printer writing to stderr with the given color choice
    pub fn stderr(choice: ColorChoice) -> Self {
        StatusPrinter {
            stream: StandardStream::stderr(choice),
        }
    }

    fn line(&mut self, spec: &ColorSpec, message: &str) {
        let _ = self.stream.set_color(spec);
        let _ = writeln!(self.stream, "{}", message);
        let _ = self.stream.reset();
    }

    /// Informational step line
    pub fn info(&mut self, message: &str) {
        self.line(ColorSpec::new().set_fg(Some(Color::Blue)), message);
    }

    /// Step completed successfully
    pub fn success(&mut self, message: &str) {
        self.line(
            ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true),
            message,
        );
    }

    /// Non-fatal problem
    pub fn warn(&mut self, message: &str) {
        self.line(
            ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true),
            message,
        );
    }

    /// Fatal or per-step failure
    pub fn error(&mut self, message: &str) {
        self.line(
            ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true),
            message,
        );
    }

    /// Uncolored line
    pub fn plain(&mut self, message: &str) {
        let _ = writeln!(self.stream, "{}", message);
    }
}
