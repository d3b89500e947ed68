//! CLI argument parsing using clap

use crate::state::store::DEFAULT_STATE_FILE;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the version summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable one-line summary
    Human,
    /// The version record as one line of JSON
    Json,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when writing to a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// verbump CLI main entry point
///
/// With no subcommand, prints the current version summary.
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Track a project's semantic version and build number")]
#[command(version)]
#[command(allow_external_subcommands = true)]
pub struct Cli {
    /// Subcommand to execute (omit to show the current version)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// State file location
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    pub file: PathBuf,

    /// Summary format
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Diagnostic verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available verbump subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactively create the version state file
    Init,

    /// Increment the major version (X.0.0)
    Major,

    /// Increment the minor version (x.Y.0)
    Minor,

    /// Increment the patch version (x.y.Z)
    Patch,

    /// Anything else is reported as an unknown command
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
