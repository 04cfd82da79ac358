//! Search history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One remembered search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    /// Entry id: the creation time in epoch milliseconds, as a decimal string.
    ///
    /// Two entries created in the same millisecond share an id.
    pub id: String,

    /// Query text exactly as typed.
    pub query: String,

    /// When the search was made.
    pub timestamp: DateTime<Utc>,
}

impl SearchHistoryEntry {
    /// Create an entry stamped with `at`.
    pub fn new(query: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis().to_string(),
            query: query.into(),
            timestamp: at,
        }
    }
}
