//! Error types for verbump
//!
//! Each layer has its own error enum; `VerbumpError` wraps them and decides
//! the process exit code.

use crate::cli::common::{EXIT_ALREADY_INITIALIZED, EXIT_CANCELLED, EXIT_FAILURE, EXIT_USAGE};
use std::path::PathBuf;

/// Version parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Text is not `major.minor.patch[-prerelease][+metadata]`
    #[error("Invalid version format '{input}': {reason}")]
    InvalidVersionFormat { input: String, reason: String },

    /// Incrementing a component would exceed `u64::MAX`
    #[error("Cannot bump {part} version of {version}: component is already at its maximum")]
    Overflow { version: String, part: &'static str },
}

/// State file errors
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No state file at the configured path
    #[error("Could not find {}. Have you run 'verbump init'?", .path.display())]
    NotInitialized { path: PathBuf },

    /// State file exists but does not hold a valid version record
    #[error("Unable to parse {}: {message}", .path.display())]
    CorruptState { path: PathBuf, message: String },

    /// State file already present when initializing
    #[error("This project is already versioned ({} exists)", .path.display())]
    AlreadyInitialized { path: PathBuf },

    /// A backup from an earlier write is still on disk
    #[error(
        "Backup file {} already exists. It may be left over from a failed write; inspect and remove it before retrying",
        .path.display()
    )]
    BackupCollision { path: PathBuf },

    /// Writing the new state failed
    #[error("{}", write_failed_message(.path, .backup, .source, .restored))]
    WriteFailed {
        path: PathBuf,
        backup: PathBuf,
        source: std::io::Error,
        restored: bool,
    },

    /// New state was written but the backup could not be removed
    #[error("Saved {}, but unable to remove backup {}: {source}", .path.display(), .backup.display())]
    CleanupFailed {
        path: PathBuf,
        backup: PathBuf,
        source: std::io::Error,
    },

    /// Any other I/O failure on the state or backup file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn write_failed_message(
    path: &std::path::Path,
    backup: &std::path::Path,
    source: &std::io::Error,
    restored: &bool,
) -> String {
    if *restored {
        format!(
            "Unable to write {}: {source}. Restored previous contents from backup",
            path.display()
        )
    } else {
        format!(
            "Unable to write {}: {source}. Could not restore backup; does {} still exist?",
            path.display(),
            backup.display()
        )
    }
}

/// Interactive prompt errors
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input ended while a prompt was waiting for an answer
    #[error("Input closed before '{0}' was answered")]
    Closed(String),

    /// Terminal interaction failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// I/O error on the prompt streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for verbump
#[derive(Debug, thiserror::Error)]
pub enum VerbumpError {
    /// Version error
    #[error(transparent)]
    Version(#[from] VersionError),

    /// State file error
    #[error(transparent)]
    State(#[from] StateError),

    /// Prompt error
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Build number is not a non-negative integer
    #[error("Invalid build number '{0}': expected a non-negative integer")]
    InvalidBuildNumber(String),

    /// Unrecognized command
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// Operator declined the confirmation
    #[error("Aborted")]
    UserCancelled,

    /// Record could not be serialized
    #[error("Unable to serialize version record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing to stdout failed
    #[error("Unable to write output: {0}")]
    Output(std::io::Error),
}

impl VerbumpError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VerbumpError::UnknownCommand(_) => EXIT_USAGE,
            VerbumpError::State(StateError::AlreadyInitialized { .. }) => {
                EXIT_ALREADY_INITIALIZED
            }
            VerbumpError::UserCancelled => EXIT_CANCELLED,
            _ => EXIT_FAILURE,
        }
    }
}
