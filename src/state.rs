//! Version record and its on-disk state file

pub mod record;
pub mod store;

pub use record::VersionRecord;
pub use store::{DEFAULT_STATE_FILE, StateStore, StorePaths};
