//! Initialize version tracking for a project
//!
//! Asks for the project name, starting version, version label and build
//! number, shows the assembled record for confirmation, then claims the
//! state file and writes it.

use crate::cli::common::{EXIT_CANCELLED, RunContext};
use crate::cli::prompt::{Prompt, console_prompt};
use crate::error::{PromptError, StateError, VerbumpError};
use crate::state::{StateStore, VersionRecord};
use crate::types::{ProjectName, SemVer, VersionLabel};
use tracing::{debug, warn};

const NAME_PROMPT: &str = "Project name (required)";
const VERSION_PROMPT: &str = "Current version (default=0.1.0)";
const LABEL_PROMPT: &str = "Version name (required)";
const BUILD_PROMPT: &str = "Current build number (default=0)";
const CONFIRM_PROMPT: &str = "Is this correct?";

/// Run the init command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (nothing printed)
/// - 1: Invalid version or build number, closed input, or I/O error
/// - 3: Already initialized
/// - 4: Confirmation declined
pub fn run_init(ctx: &RunContext) -> i32 {
    let mut prompt = console_prompt();
    match init_project(&ctx.store(), prompt.as_mut()) {
        Err(VerbumpError::UserCancelled) => {
            eprintln!("Aborted");
            EXIT_CANCELLED
        }
        result => ctx.finish(result.map(|_| ())),
    }
}

/// Prompts for a new record and writes it to the store
///
/// The state file is claimed with `StateStore::init_guard` only after the
/// operator confirms, so a cancelled init leaves nothing behind.
pub fn init_project(
    store: &StateStore,
    prompt: &mut dyn Prompt,
) -> Result<VersionRecord, VerbumpError> {
    if store.is_initialized() {
        return Err(StateError::AlreadyInitialized {
            path: store.paths().state().to_path_buf(),
        }
        .into());
    }

    let record = collect_record(prompt)?;

    store.init_guard()?;
    if let Err(e) = store.save(&record) {
        if let Err(cleanup) = store.discard_placeholder() {
            warn!(error = %cleanup, "could not remove state file placeholder");
        }
        return Err(e.into());
    }

    debug!(path = %store.paths().state().display(), "initialized version record");
    Ok(record)
}

/// Runs the prompt sequence and returns the confirmed record
///
/// Blank answers to required fields re-prompt. A starting version or build
/// number that does not parse ends the sequence with an error.
pub fn collect_record(prompt: &mut dyn Prompt) -> Result<VersionRecord, VerbumpError> {
    let name = required(prompt, NAME_PROMPT, ProjectName::new)?;

    let version_text = prompt.text(VERSION_PROMPT)?;
    let version = if version_text.is_empty() {
        SemVer::default()
    } else {
        SemVer::parse(&version_text)?
    };

    let label = required(prompt, LABEL_PROMPT, VersionLabel::new)?;

    let build = parse_build(&prompt.text(BUILD_PROMPT)?)?;

    let record = VersionRecord::new(name, version, label, build);

    prompt.note(&record.to_string())?;
    if !prompt.confirm(CONFIRM_PROMPT, true)? {
        return Err(VerbumpError::UserCancelled);
    }

    Ok(record)
}

/// Parses a build number; empty input is 0
pub fn parse_build(text: &str) -> Result<u64, VerbumpError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<u64>()
        .map_err(|_| VerbumpError::InvalidBuildNumber(text.to_string()))
}

fn required<T>(
    prompt: &mut dyn Prompt,
    label: &str,
    make: impl Fn(String) -> Option<T>,
) -> Result<T, PromptError> {
    loop {
        if let Some(value) = make(prompt.text(label)?) {
            return Ok(value);
        }
    }
}
