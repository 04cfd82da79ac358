//! Key/value storage backends.
//!
//! A backend behaves like browser local storage: string keys map to string
//! values, a missing key reads as `None`, and removing a missing key is not
//! an error.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Durable string storage.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
