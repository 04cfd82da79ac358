//! # Store configuration (`govapp.toml`)
//!
//! ```toml
//! storage_key = "government-app-storage"
//! max_search_history = 10
//! persist = true
//! # storage_dir = "/custom/data/dir"
//! ```
//!
//! Every field has a default, so a missing or empty file is the default
//! configuration.

use std::path::{Path, PathBuf};

use govapp_persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on retained search history, whatever the config says.
pub const MAX_SEARCH_HISTORY: usize = 10;

/// Errors reading or writing a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key the persisted snapshot lives under.
    pub storage_key: String,

    /// Maximum number of search history entries kept (default: 10).
    ///
    /// Read through [`StoreConfig::history_limit`], which clamps it to
    /// `1..=MAX_SEARCH_HISTORY`.
    pub max_search_history: usize,

    /// Directory for file storage. `None` uses the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Whether to hydrate from and write to storage at all.
    pub persist: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_search_history: MAX_SEARCH_HISTORY,
            storage_dir: None,
            persist: true,
        }
    }
}

impl StoreConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "govapp.toml"
    }

    /// Default config file path in the platform config directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("gov", "GovServices", "GovApp")
            .map(|dirs| dirs.config_dir().join(Self::filename()))
            .unwrap_or_else(|| PathBuf::from(Self::filename()))
    }

    /// Load from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, falling back to defaults if the file is missing or
    /// invalid.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Load from `path`, surfacing errors.
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Save to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, self.to_toml()?).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builder method to change the history limit.
    pub fn with_max_search_history(mut self, max: usize) -> Self {
        self.max_search_history = max;
        self
    }

    /// Effective history limit.
    pub fn history_limit(&self) -> usize {
        self.max_search_history.clamp(1, MAX_SEARCH_HISTORY)
    }

    /// Builder method to set the storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Config with persistence switched off.
    pub fn in_memory() -> Self {
        Self {
            persist: false,
            ..Self::default()
        }
    }
}
