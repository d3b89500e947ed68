//! Bump command implementation
//!
//! `verbump major|minor|patch` loads the record, increments the requested
//! version part, saves the new record and prints its summary.

use crate::cli::common::RunContext;
use crate::error::VerbumpError;
use crate::state::{StateStore, VersionRecord};
use crate::types::BumpPart;
use tracing::debug;

/// Run the bump command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Not initialized, corrupt state, component overflow, or save failure
pub fn run_bump(ctx: &RunContext, part: BumpPart) -> i32 {
    let result = bump(&ctx.store(), part).and_then(|record| ctx.print_summary(&record));
    ctx.finish(result)
}

/// Applies the bump to the stored record and persists it
///
/// Returns the record that was saved. Nothing is written when the
/// increment fails.
pub fn bump(store: &StateStore, part: BumpPart) -> Result<VersionRecord, VerbumpError> {
    let current = store.load()?;
    let next = current.bump(part)?;
    store.save(&next)?;

    debug!(
        part = %part,
        from = %current.version(),
        to = %next.version(),
        "bumped version"
    );
    Ok(next)
}
