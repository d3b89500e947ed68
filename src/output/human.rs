#![forbid(unsafe_code)]

//! Human-readable output
//!
//! Prints the one-line version summary and `Error:` lines, colored through
//! termcolor when the color choice allows it.

use crate::cli::args::ColorChoice;
use crate::state::VersionRecord;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Human output formatter
#[derive(Debug, Clone, Copy)]
pub struct HumanFormatter {
    color: ColorChoice,
}

impl HumanFormatter {
    pub fn new(color: ColorChoice) -> Self {
        HumanFormatter { color }
    }

    /// Writes `<name> - <label> v<version> build <build>` followed by a newline
    pub fn write_summary<W: WriteColor>(
        &self,
        out: &mut W,
        record: &VersionRecord,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", record.name())?;
        out.reset()?;
        write!(out, " - {} ", record.label())?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "v{}", record.version())?;
        out.reset()?;
        writeln!(out, " build {}", record.build())
    }

    /// Writes `Error: <message>` followed by a newline
    pub fn write_error<W: WriteColor>(
        &self,
        out: &mut W,
        error: &dyn std::fmt::Display,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "Error:")?;
        out.reset()?;
        writeln!(out, " {}", error)
    }

    /// Prints the summary to stdout
    pub fn print_summary(&self, record: &VersionRecord) -> io::Result<()> {
        let choice = self.resolve(io::stdout().is_terminal());
        let mut stdout = StandardStream::stdout(choice);
        self.write_summary(&mut stdout, record)?;
        stdout.flush()
    }

    /// Prints an error line to stderr
    pub fn print_error(&self, error: &dyn std::fmt::Display) {
        let choice = self.resolve(io::stderr().is_terminal());
        let mut stderr = StandardStream::stderr(choice);
        // Nothing sensible to do if stderr itself is gone
        let _ = self.write_error(&mut stderr, error);
    }

    /// Maps the CLI choice onto termcolor, treating `auto` as "only on a terminal"
    fn resolve(&self, is_terminal: bool) -> termcolor::ColorChoice {
        match self.color {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}
