//! The version record persisted in the state file

use crate::error::VersionError;
use crate::types::{BumpPart, ProjectName, SemVer, VersionLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project name, current version, label and build counter
///
/// Records are values: updates build a new record instead of changing
/// fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    name: ProjectName,
    version: SemVer,
    #[serde(rename = "versionString")]
    label: VersionLabel,
    build: u64,
}

impl VersionRecord {
    pub fn new(name: ProjectName, version: SemVer, label: VersionLabel, build: u64) -> Self {
        VersionRecord {
            name,
            version,
            label,
            build,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn version(&self) -> &SemVer {
        &self.version
    }

    pub fn label(&self) -> &VersionLabel {
        &self.label
    }

    pub fn build(&self) -> u64 {
        self.build
    }

    /// Returns a copy of this record carrying `version`
    pub fn with_version(&self, version: SemVer) -> VersionRecord {
        VersionRecord {
            version,
            ..self.clone()
        }
    }

    /// Returns a copy of this record with the given version part incremented
    pub fn bump(&self, part: BumpPart) -> Result<VersionRecord, VersionError> {
        Ok(self.with_version(part.apply(&self.version)?))
    }
}

/// One-line summary: `<name> - <label> v<version> build <build>`
impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} v{} build {}",
            self.name, self.label, self.version, self.build
        )
    }
}
