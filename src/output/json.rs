#![forbid(unsafe_code)]

//! JSON output formatter for machine-readable output
//!
//! Emits the version record as a single JSON object on one line, using the
//! same field names as the state file.

use crate::error::VerbumpError;
use crate::state::VersionRecord;
use std::io::{self, Write};

/// JSON output formatter
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format the record as one line of JSON (no trailing newline)
    pub fn format(&self, record: &VersionRecord) -> Result<String, serde_json::Error> {
        serde_json::to_string(record)
    }

    /// Prints the record to stdout
    pub fn print(&self, record: &VersionRecord) -> Result<(), VerbumpError> {
        let line = self.format(record)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line).map_err(VerbumpError::Output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
