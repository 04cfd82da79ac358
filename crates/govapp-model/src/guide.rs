//! Common-transaction guides.
//!
//! A guide describes how to complete one government procedure: what to
//! bring, where to go, the steps in order, and which fields the online
//! application form asks for.

use serde::{Deserialize, Serialize};

/// Guide entry for a frequently used government procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonTransaction {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Emoji shown on the service tile.
    pub icon: String,

    /// Service category (e.g. "户政服务").
    pub category: String,
    pub estimated_time: String,

    /// Short list of key documents.
    #[serde(default)]
    pub required_documents: Vec<String>,

    /// Ordered procedure steps, already numbered for display.
    #[serde(default)]
    pub process: Vec<String>,

    /// Full material checklist.
    #[serde(default)]
    pub materials: Vec<String>,

    /// Where to apply in person.
    pub address: String,

    /// Field names of the online application form, in display order.
    #[serde(default)]
    pub online_form_fields: Vec<String>,
}

impl CommonTransaction {
    /// Number of procedure steps.
    pub fn step_count(&self) -> usize {
        self.process.len()
    }

    /// Whether the online form asks for `field`.
    pub fn has_form_field(&self, field: &str) -> bool {
        self.online_form_fields.iter().any(|f| f == field)
    }
}
