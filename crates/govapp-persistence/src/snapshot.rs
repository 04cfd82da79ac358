//! Persisted state snapshot.
//!
//! Only the session, search history and location survive a restart. They
//! are stored as one JSON record under a fixed key:
//!
//! ```json
//! {
//!   "state": {
//!     "user": { "id": "1", "name": "张三", "phone": "138...", "userType": "citizen" },
//!     "isLoggedIn": true,
//!     "searchHistory": [ { "id": "1705307400000", "query": "身份证", "timestamp": "..." } ],
//!     "location": null
//!   },
//!   "version": 0
//! }
//! ```
//!
//! Fields missing from `state` take their defaults and unknown fields are
//! ignored, so adding a field does not need a version bump. Records with a
//! different `version` are rejected.

use govapp_model::{Location, SearchHistoryEntry, User};
use serde::{Deserialize, Serialize};

use crate::error::{PersistenceError, Result};
use crate::storage::StorageBackend;

/// Key the snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "government-app-storage";

/// Current snapshot schema version.
///
/// Increment this when a change to [`PersistedState`] cannot be handled by
/// field defaults. Records with any other version are discarded.
pub const CURRENT_STATE_VERSION: u32 = 0;

/// The persisted slice of the app state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedState {
    pub user: Option<User>,
    pub is_logged_in: bool,
    pub search_history: Vec<SearchHistoryEntry>,
    pub location: Option<Location>,
}

/// Versioned wrapper written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    #[serde(default)]
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

impl StoredRecord {
    /// Wrap `state` with the current version.
    pub fn new(state: PersistedState) -> Self {
        Self {
            state,
            version: CURRENT_STATE_VERSION,
        }
    }
}

/// Encode a snapshot as the stored JSON record.
pub fn encode_state(key: &str, state: &PersistedState) -> Result<String> {
    let record = StoredRecord::new(state.clone());
    serde_json::to_string(&record).map_err(|source| PersistenceError::Serialization {
        key: key.to_string(),
        source,
    })
}

/// Decode a stored JSON record, checking its version.
pub fn decode_state(key: &str, raw: &str) -> Result<PersistedState> {
    let record: StoredRecord =
        serde_json::from_str(raw).map_err(|source| PersistenceError::Deserialization {
            key: key.to_string(),
            source,
        })?;

    if record.version != CURRENT_STATE_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            key: key.to_string(),
            found: record.version,
            expected: CURRENT_STATE_VERSION,
        });
    }

    Ok(record.state)
}

/// Read the snapshot stored under `key`.
///
/// Returns `Ok(None)` when nothing has been stored yet.
pub fn load_state(storage: &dyn StorageBackend, key: &str) -> Result<Option<PersistedState>> {
    let Some(raw) = storage.get_item(key)? else {
        tracing::debug!(key, "No persisted state");
        return Ok(None);
    };
    let state = decode_state(key, &raw)?;
    tracing::info!(
        key,
        logged_in = state.is_logged_in,
        history = state.search_history.len(),
        "Loaded persisted state"
    );
    Ok(Some(state))
}

/// Write `state` under `key`.
pub fn save_state(storage: &dyn StorageBackend, key: &str, state: &PersistedState) -> Result<()> {
    let raw = encode_state(key, state)?;
    storage.set_item(key, &raw)
}

/// Delete the snapshot stored under `key`.
pub fn clear_state(storage: &dyn StorageBackend, key: &str) -> Result<()> {
    storage.remove_item(key)?;
    tracing::info!(key, "Cleared persisted state");
    Ok(())
}
