#![forbid(unsafe_code)]

//! Core domain types for verbump
//!
//! This module defines the version value and the validated text fields that
//! make up a version record.

use crate::error::VersionError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A semantic version: `major.minor.patch[-prerelease][+metadata]`
///
/// Values are immutable; the increment operations return a new `SemVer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemVer(semver::Version);

impl SemVer {
    /// Creates a plain `major.minor.patch` version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer(semver::Version::new(major, minor, patch))
    }

    /// Parses a version string
    ///
    /// A single leading `v` or `V` is accepted and dropped. Surrounding
    /// whitespace is not; callers reading user input trim it first.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let bare = text
            .strip_prefix('v')
            .or_else(|| text.strip_prefix('V'))
            .unwrap_or(text);

        semver::Version::parse(bare)
            .map(SemVer)
            .map_err(|e| VersionError::InvalidVersionFormat {
                input: text.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Pre-release identifiers, empty if none
    pub fn pre_release(&self) -> &str {
        self.0.pre.as_str()
    }

    /// Build metadata, empty if none
    pub fn metadata(&self) -> &str {
        self.0.build.as_str()
    }

    /// `(major+1).0.0`
    pub fn increment_major(&self) -> Result<SemVer, VersionError> {
        let major = self.next(self.major(), BumpPart::Major)?;
        Ok(SemVer::new(major, 0, 0))
    }

    /// `major.(minor+1).0`
    pub fn increment_minor(&self) -> Result<SemVer, VersionError> {
        let minor = self.next(self.minor(), BumpPart::Minor)?;
        Ok(SemVer::new(self.major(), minor, 0))
    }

    /// `major.minor.(patch+1)`
    pub fn increment_patch(&self) -> Result<SemVer, VersionError> {
        let patch = self.next(self.patch(), BumpPart::Patch)?;
        Ok(SemVer::new(self.major(), self.minor(), patch))
    }

    fn next(&self, component: u64, part: BumpPart) -> Result<u64, VersionError> {
        component.checked_add(1).ok_or_else(|| VersionError::Overflow {
            version: self.to_string(),
            part: part.as_str(),
        })
    }

    /// Compares by semantic-version precedence
    ///
    /// Build metadata does not participate, so `1.0.0+a` and `1.0.0+b`
    /// compare equal here even though they are different values.
    pub fn cmp_precedence(&self, other: &SemVer) -> Ordering {
        self.0
            .major
            .cmp(&other.0.major)
            .then_with(|| self.0.minor.cmp(&other.0.minor))
            .then_with(|| self.0.patch.cmp(&other.0.patch))
            .then_with(|| self.0.pre.cmp(&other.0.pre))
    }
}

impl Default for SemVer {
    fn default() -> Self {
        SemVer::new(0, 1, 0)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemVer::parse(s)
    }
}

impl TryFrom<String> for SemVer {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SemVer::parse(&value)
    }
}

impl From<SemVer> for String {
    fn from(version: SemVer) -> Self {
        version.to_string()
    }
}

/// Which component of the version a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpPart {
    Major,
    Minor,
    Patch,
}

impl BumpPart {
    /// Applies the increment for this part
    pub fn apply(self, version: &SemVer) -> Result<SemVer, VersionError> {
        match self {
            BumpPart::Major => version.increment_major(),
            BumpPart::Minor => version.increment_minor(),
            BumpPart::Patch => version.increment_patch(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BumpPart::Major => "major",
            BumpPart::Minor => "minor",
            BumpPart::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project name
///
/// Project names must contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a new ProjectName, returning None for blank input
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return None;
        }
        Some(ProjectName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProjectName::new(value).ok_or_else(|| "project name must not be empty".to_string())
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

/// Free-text label attached to a version (e.g. a release codename)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionLabel(String);

impl VersionLabel {
    /// Creates a new VersionLabel, returning None for blank input
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return None;
        }
        Some(VersionLabel(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VersionLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        VersionLabel::new(value).ok_or_else(|| "version label must not be empty".to_string())
    }
}

impl From<VersionLabel> for String {
    fn from(label: VersionLabel) -> Self {
        label.0
    }
}
