//! Navigation state types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// TAB ENUM
// =============================================================================

/// Bottom-bar tab of the app.
///
/// The closed set of screens the front end can show at the top level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Home screen with search and featured services (default)
    #[default]
    Home,

    /// Common-transaction guide catalog
    Services,

    /// Progress of the user's transactions
    Transactions,

    /// Policy announcements
    Policies,

    /// Account and settings
    Profile,
}

impl Tab {
    /// Identifier used by the front end router.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Transactions => "transactions",
            Self::Policies => "policies",
            Self::Profile => "profile",
        }
    }

    /// Tab bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "首页",
            Self::Services => "办事",
            Self::Transactions => "进度",
            Self::Policies => "政策",
            Self::Profile => "我的",
        }
    }

    /// Get all tabs in display order.
    pub const fn all() -> &'static [Tab] {
        &[
            Self::Home,
            Self::Services,
            Self::Transactions,
            Self::Policies,
            Self::Profile,
        ]
    }

    /// Get the index of this tab (0-based).
    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Services => 1,
            Self::Transactions => 2,
            Self::Policies => 3,
            Self::Profile => 4,
        }
    }

    /// Get tab by index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown tab: {s}"))
    }
}
