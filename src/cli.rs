//! CLI argument parsing and command dispatch

pub mod args;
pub mod bump;
pub mod common;
pub mod init;
pub mod prompt;
pub mod show;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
pub use common::RunContext;

use crate::types::BumpPart;

/// Runs the parsed command and returns the process exit code
pub fn dispatch(ctx: &RunContext, command: Option<Command>) -> i32 {
    match command {
        None => show::run_show(ctx),
        Some(Command::Init) => init::run_init(ctx),
        Some(Command::Major) => bump::run_bump(ctx, BumpPart::Major),
        Some(Command::Minor) => bump::run_bump(ctx, BumpPart::Minor),
        Some(Command::Patch) => bump::run_bump(ctx, BumpPart::Patch),
        Some(Command::Unknown(args)) => common::run_unknown(ctx, &args),
    }
}
