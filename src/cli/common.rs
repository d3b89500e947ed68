//! Common helpers shared across CLI commands
//!
//! Exit codes, the per-invocation context built from the parsed arguments,
//! and the summary/error printing every command ends with.

use crate::cli::args::{Cli, ColorChoice, OutputFormat};
use crate::error::VerbumpError;
use crate::output::{HumanFormatter, JsonFormatter};
use crate::state::{StateStore, StorePaths, VersionRecord};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_ALREADY_INITIALIZED: i32 = 3;
pub const EXIT_CANCELLED: i32 = 4;

/// Everything a command needs from the command line
#[derive(Debug, Clone)]
pub struct RunContext {
    pub paths: StorePaths,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl RunContext {
    pub fn new(paths: StorePaths, format: OutputFormat, color: ColorChoice) -> Self {
        RunContext {
            paths,
            format,
            color,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(StorePaths::new(cli.file.clone()), cli.format, cli.color)
    }

    /// Store bound to the configured state file
    pub fn store(&self) -> StateStore {
        StateStore::new(self.paths.clone())
    }

    pub(crate) fn human(&self) -> HumanFormatter {
        HumanFormatter::new(self.color)
    }

    /// Prints the record in the selected format
    pub(crate) fn print_summary(&self, record: &VersionRecord) -> Result<(), VerbumpError> {
        match self.format {
            OutputFormat::Human => self
                .human()
                .print_summary(record)
                .map_err(VerbumpError::Output),
            OutputFormat::Json => JsonFormatter::new().print(record),
        }
    }

    /// Reports the outcome of a command and returns its exit code
    pub(crate) fn finish(&self, result: Result<(), VerbumpError>) -> i32 {
        match result {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                self.human().print_error(&e);
                e.exit_code()
            }
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(StorePaths::default(), OutputFormat::Human, ColorChoice::Auto)
    }
}

/// Handles a command token that is not one of the known subcommands
pub fn run_unknown(ctx: &RunContext, args: &[String]) -> i32 {
    let command = args.first().cloned().unwrap_or_default();
    ctx.finish(Err(VerbumpError::UnknownCommand(command)))
}
