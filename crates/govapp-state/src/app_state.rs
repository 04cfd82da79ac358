//! Application-level state.
//!
//! This module contains `AppState`, the root of all state the front end
//! reads. Only the session, search history and location are persisted; the
//! rest starts from compiled-in defaults every run.

use govapp_model::{CommonTransaction, Location, Policy, SearchHistoryEntry, Transaction, User};
use govapp_persistence::PersistedState;

use crate::navigation::Tab;

/// Top-level application state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Signed-in user (None when logged out)
    pub user: Option<User>,
    /// Logged-in flag, kept alongside `user` as the front end expects
    pub is_logged_in: bool,
    /// Active bottom-bar tab
    pub current_tab: Tab,
    /// Recent searches, most recent first
    pub search_history: Vec<SearchHistoryEntry>,
    /// Last-known position
    pub location: Option<Location>,
    /// The user's transactions
    pub transactions: Vec<Transaction>,
    /// Policy announcements
    pub policies: Vec<Policy>,
    /// Common-transaction guide catalog
    pub common_transactions: &'static [CommonTransaction],
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            is_logged_in: false,
            current_tab: Tab::default(),
            search_history: Vec::new(),
            location: None,
            transactions: govapp_catalog::default_transactions().to_vec(),
            policies: govapp_catalog::default_policies().to_vec(),
            common_transactions: govapp_catalog::common_transactions(),
        }
    }
}

impl AppState {
    /// Copy out the persisted slice.
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            user: self.user.clone(),
            is_logged_in: self.is_logged_in,
            search_history: self.search_history.clone(),
            location: self.location.clone(),
        }
    }

    /// Overlay a persisted slice onto this state.
    ///
    /// Persisted fields replace the current ones; everything else is kept.
    pub fn merge_persisted(&mut self, persisted: PersistedState) {
        self.user = persisted.user;
        self.is_logged_in = persisted.is_logged_in;
        self.search_history = persisted.search_history;
        self.location = persisted.location;
    }

    /// The most recent search, if any.
    pub fn latest_search(&self) -> Option<&SearchHistoryEntry> {
        self.search_history.first()
    }

    /// Look up one of the user's transactions by id.
    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Look up a policy by id.
    pub fn policy(&self, id: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.id == id)
    }

    /// Look up a common-transaction guide by id.
    pub fn common_transaction(&self, id: &str) -> Option<&'static CommonTransaction> {
        self.common_transactions.iter().find(|c| c.id == id)
    }
}
