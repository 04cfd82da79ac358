//! Durable storage for the government services app state.
//!
//! This crate stores the persisted slice of the app state (session, search
//! history, location) as a single JSON record in a key/value backend with
//! browser local-storage semantics.
//!
//! # Features
//!
//! - **Pluggable backends** behind [`StorageBackend`]: [`MemoryStorage`] and
//!   [`FileStorage`]
//! - **Atomic writes** for the filesystem backend
//! - **Field defaulting** so older records load after fields are added
//! - **Versioned records**; foreign versions are rejected
//!
//! # Example
//!
//! ```ignore
//! use govapp_persistence::{FileStorage, PersistedState, load_state, save_state};
//!
//! let storage = FileStorage::in_default_dir()?;
//! save_state(&storage, "government-app-storage", &PersistedState::default())?;
//! let restored = load_state(&storage, "government-app-storage")?;
//! ```

mod error;
mod snapshot;
mod storage;

pub use error::{PersistenceError, Result};
pub use snapshot::{
    CURRENT_STATE_VERSION, DEFAULT_STORAGE_KEY, PersistedState, StoredRecord, clear_state,
    decode_state, encode_state, load_state, save_state,
};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
