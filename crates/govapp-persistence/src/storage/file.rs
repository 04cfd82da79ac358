//! # Filesystem-backed storage
//!
//! [`FileStorage`] keeps one file per key under a base directory:
//!
//! ```text
//! <base_dir>/
//! └── <key>.json
//! ```
//!
//! Writes go to `<key>.json.tmp` first and are renamed into place, so a
//! crash mid-write leaves the previous value intact.
//!
//! Use [`FileStorage::default_dir`] for the platform data directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/gov.GovServices.GovApp/` |
//! | Linux | `~/.local/share/govapp/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\GovServices\GovApp\data\` |

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::StorageBackend;
use crate::error::{PersistenceError, Result};

/// Filesystem-backed storage for desktop and mobile hosts.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Storage rooted at the platform data directory.
    pub fn in_default_dir() -> Result<Self> {
        Self::default_dir()
            .map(Self::new)
            .ok_or(PersistenceError::NoDataDir)
    }

    /// The platform data directory for the app, if the platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("gov", "GovServices", "GovApp")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Base directory of this storage.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File holding the value for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.base).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.base.clone(),
            source: e,
        })?;

        let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(value.as_bytes())
            .map_err(|e| PersistenceError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| PersistenceError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Io {
                operation: "remove",
                path,
                source: e,
            }),
        }
    }
}
