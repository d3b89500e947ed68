//! State file persistence
//!
//! The state file holds one pretty-printed JSON `VersionRecord`. Saves go
//! through a backup file so a failed write can be rolled back:
//!
//! 1. Refuse to start if the backup file already exists.
//! 2. Move the current state file to the backup path (if there is one).
//! 3. Write the new state file.
//! 4. On write failure, move the backup back over the state file.
//! 5. On success, delete the backup.

use crate::error::StateError;
use crate::state::record::VersionRecord;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default state file name, relative to the invocation directory
pub const DEFAULT_STATE_FILE: &str = "ver.json";

/// Suffix appended to the state file path to form the backup path
pub const BACKUP_SUFFIX: &str = ".bak";

/// Locations of the state file and its transient backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    state: PathBuf,
    backup: PathBuf,
}

impl StorePaths {
    /// Uses `state` as the state file and `<state>.bak` as the backup
    pub fn new(state: impl Into<PathBuf>) -> Self {
        let state = state.into();
        let mut backup = OsString::from(state.as_os_str());
        backup.push(BACKUP_SUFFIX);
        StorePaths {
            state,
            backup: PathBuf::from(backup),
        }
    }

    /// Uses explicit paths for both files
    pub fn with_backup(state: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        StorePaths {
            state: state.into(),
            backup: backup.into(),
        }
    }

    /// Default file name inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        StorePaths::new(dir.join(DEFAULT_STATE_FILE))
    }

    pub fn state(&self) -> &Path {
        &self.state
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }
}

impl Default for StorePaths {
    fn default() -> Self {
        StorePaths::new(DEFAULT_STATE_FILE)
    }
}

/// Loads and saves the version record at a fixed location
#[derive(Debug, Clone)]
pub struct StateStore {
    paths: StorePaths,
}

impl StateStore {
    pub fn new(paths: StorePaths) -> Self {
        StateStore { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Whether a state file is present
    ///
    /// Only a hint for early feedback; `init_guard` is the authoritative check.
    pub fn is_initialized(&self) -> bool {
        fs::symlink_metadata(&self.paths.state).is_ok()
    }

    /// Reads the record from the state file
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotInitialized` if the file does not exist and
    /// `StateError::CorruptState` if it does not hold a valid record. Never
    /// creates the file.
    pub fn load(&self) -> Result<VersionRecord, StateError> {
        let path = &self.paths.state;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StateError::NotInitialized { path: path.clone() });
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(StateError::CorruptState {
                    path: path.clone(),
                    message: e.to_string(),
                });
            }
            Err(source) => {
                return Err(StateError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };

        let record: VersionRecord =
            serde_json::from_str(&text).map_err(|e| StateError::CorruptState {
                path: path.clone(),
                message: e.to_string(),
            })?;
        debug!(path = %path.display(), version = %record.version(), "loaded version record");
        Ok(record)
    }

    /// Claims the state file path for a new project
    ///
    /// Creates an empty placeholder with an exclusive create, so the existence
    /// check and the creation cannot be separated by another writer.
    ///
    /// # Errors
    ///
    /// Returns `StateError::AlreadyInitialized` if the state file exists.
    pub fn init_guard(&self) -> Result<(), StateError> {
        let path = &self.paths.state;
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {
                debug!(path = %path.display(), "created state file placeholder");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(StateError::AlreadyInitialized { path: path.clone() })
            }
            Err(source) => Err(StateError::Io {
                path: path.clone(),
                source,
            }),
        }
    }

    /// Removes the state file if it is still the empty placeholder left by
    /// `init_guard`. Returns whether a file was removed.
    pub fn discard_placeholder(&self) -> Result<bool, StateError> {
        let path = &self.paths.state;
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() && meta.len() == 0 => {
                fs::remove_file(path).map_err(|source| StateError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "removed state file placeholder");
                Ok(true)
            }
            Ok(_) => Ok(false),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StateError::Io {
                path: path.clone(),
                source,
            }),
        }
    }

    /// Writes the record to the state file, keeping a backup until the write
    /// has succeeded
    ///
    /// # Errors
    ///
    /// - `StateError::BackupCollision` if the backup file already exists
    /// - `StateError::WriteFailed` if the new contents could not be written
    /// - `StateError::CleanupFailed` if the save succeeded but the backup
    ///   could not be removed
    pub fn save(&self, record: &VersionRecord) -> Result<(), StateError> {
        self.save_with(record, write_state_file)
    }

    /// `save` with the file write step supplied by the caller
    pub(crate) fn save_with<F>(&self, record: &VersionRecord, write: F) -> Result<(), StateError>
    where
        F: FnOnce(&Path, &[u8]) -> io::Result<()>,
    {
        let StorePaths { state, backup } = &self.paths;
        let bytes = encode(record).map_err(|source| StateError::Io {
            path: state.clone(),
            source: io::Error::new(ErrorKind::InvalidData, source),
        })?;

        if fs::symlink_metadata(backup).is_ok() {
            return Err(StateError::BackupCollision {
                path: backup.clone(),
            });
        }

        let had_previous = match fs::rename(state, backup) {
            Ok(()) => {
                debug!(backup = %backup.display(), "moved current state to backup");
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(source) => {
                return Err(StateError::Io {
                    path: backup.clone(),
                    source,
                });
            }
        };

        if let Err(source) = write(state.as_path(), bytes.as_slice()) {
            let restored = if had_previous {
                fs::rename(backup, state)
            } else {
                remove_if_present(state)
            };
            if let Err(e) = &restored {
                warn!(
                    path = %state.display(),
                    backup = %backup.display(),
                    error = %e,
                    "could not restore state file after failed write"
                );
            }
            return Err(StateError::WriteFailed {
                path: state.clone(),
                backup: backup.clone(),
                source,
                restored: restored.is_ok(),
            });
        }

        if had_previous {
            if let Err(source) = fs::remove_file(backup) {
                warn!(
                    path = %state.display(),
                    backup = %backup.display(),
                    error = %source,
                    "saved state file but could not remove backup"
                );
                return Err(StateError::CleanupFailed {
                    path: state.clone(),
                    backup: backup.clone(),
                    source,
                });
            }
        }

        debug!(path = %state.display(), version = %record.version(), "saved version record");
        Ok(())
    }
}

/// Pretty-printed JSON with a trailing newline
fn encode(record: &VersionRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut bytes = serde_json::to_vec_pretty(record)?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_state_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
