//! Test utilities for verbump integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use verbump::{ProjectName, SemVer, VersionLabel, VersionRecord};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Builds a record from plain values
pub fn record(name: &str, version: &str, label: &str, build: u64) -> VersionRecord {
    VersionRecord::new(
        ProjectName::new(name).expect("valid name"),
        SemVer::parse(version).expect("valid version"),
        VersionLabel::new(label).expect("valid label"),
        build,
    )
}

/// Writes a state file by hand, bypassing the store
pub fn write_state(dir: &Path, name: &str, version: &str, label: &str, build: u64) {
    let json = format!(
        "{{\n  \"name\": \"{}\",\n  \"version\": \"{}\",\n  \"versionString\": \"{}\",\n  \"build\": {}\n}}\n",
        name, version, label, build
    );
    fs::write(dir.join("ver.json"), json).expect("write state file");
}

/// Reads `ver.json` in `dir` as JSON
pub fn read_state(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join("ver.json")).expect("read state file");
    serde_json::from_str(&text).expect("state file is JSON")
}
