//! Policy announcements.

use serde::{Deserialize, Serialize};

/// A published policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub title: String,

    /// Short teaser shown in lists.
    pub summary: String,

    /// Full text, paragraphs separated by blank lines.
    pub content: String,
    pub category: String,
    pub publish_date: String,
    pub effective_date: String,

    /// Region the policy applies to.
    pub location: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Issuing office.
    pub author: String,

    /// Shown with a "new" badge.
    #[serde(default)]
    pub is_new: bool,
}

impl Policy {
    /// Whether the policy carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
