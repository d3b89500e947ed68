//! Show the current version (no subcommand)

use crate::cli::common::RunContext;
use crate::error::VerbumpError;
use crate::state::{StateStore, VersionRecord};

/// Run the show command
///
/// Prints `<name> - <label> v<version> build <build>` (or the JSON record).
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Not initialized, unreadable state file, or output error
pub fn run_show(ctx: &RunContext) -> i32 {
    let result = show(&ctx.store()).and_then(|record| ctx.print_summary(&record));
    ctx.finish(result)
}

/// Loads the record to display
pub fn show(store: &StateStore) -> Result<VersionRecord, VerbumpError> {
    Ok(store.load()?)
}
