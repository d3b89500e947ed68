#![forbid(unsafe_code)]

//! verbump: track a project's semantic version and build number
//!
//! The version record (project name, semantic version, label and build
//! counter) lives in a JSON state file in the project directory. verbump
//! creates it interactively, prints it, and bumps the major, minor or patch
//! component.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod state;
pub mod types;

// Re-export error types for convenient access
pub use error::{PromptError, StateError, VerbumpError, VersionError};

// Re-export core domain types for convenient access
pub use state::{StateStore, StorePaths, VersionRecord};
pub use types::{BumpPart, ProjectName, SemVer, VersionLabel};
