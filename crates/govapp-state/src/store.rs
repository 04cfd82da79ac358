//! The application state store.
//!
//! `Store` owns the [`AppState`], the storage backend and the observers.
//! Every mutator replaces part of the state, writes the persisted slice if
//! it changed, then notifies observers. None of them can fail: storage
//! errors are logged and remembered, and the in-memory state stays
//! authoritative.

use govapp_model::{Location, SearchHistoryEntry, User, UserType};
use govapp_persistence::{
    FileStorage, MemoryStorage, PersistenceError, StorageBackend, clear_state, load_state,
    save_state,
};

use crate::app_state::AppState;
use crate::config::StoreConfig;
use crate::navigation::Tab;
use crate::subscription::{StateChange, StateSlice, SubscriptionId, Subscribers};
use crate::time::{SystemTimeSource, TimeSource};

/// Single-threaded state container with change notification.
pub struct Store {
    state: AppState,
    config: StoreConfig,
    storage: Box<dyn StorageBackend>,
    time: Box<dyn TimeSource>,
    subscribers: Subscribers,
    hydrated: bool,
    last_persistence_error: Option<String>,
}

impl Store {
    /// Create a store with default state and private in-memory storage.
    ///
    /// Nothing is hydrated; use [`Store::with_storage`] to restore a
    /// previous session.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            storage: Box::new(MemoryStorage::new()),
            time: Box::new(SystemTimeSource),
            subscribers: Subscribers::default(),
            hydrated: false,
            last_persistence_error: None,
        }
    }

    /// Create a store backed by `storage` and hydrate from it.
    pub fn with_storage(config: StoreConfig, storage: impl StorageBackend + 'static) -> Self {
        let mut store = Self::new(config);
        store.storage = Box::new(storage);
        if store.config.persist {
            store.rehydrate();
        }
        store
    }

    /// Create a store on file storage in the configured (or platform)
    /// data directory, falling back to memory when there is none.
    pub fn open(config: StoreConfig) -> Self {
        let storage = match &config.storage_dir {
            Some(dir) => Ok(FileStorage::new(dir.clone())),
            None => FileStorage::in_default_dir(),
        };
        match storage {
            Ok(storage) => {
                tracing::info!("Using state storage at {}", storage.base().display());
                Self::with_storage(config, storage)
            }
            Err(e) => {
                tracing::warn!("{e}; keeping state in memory");
                let mut store = Self::with_storage(config, MemoryStorage::new());
                store.last_persistence_error = Some(e.user_message());
                store
            }
        }
    }

    /// Replace the time source used to stamp search history.
    pub fn with_time_source(mut self, time: impl TimeSource + 'static) -> Self {
        self.time = Box::new(time);
        self
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in
    }

    pub fn current_tab(&self) -> Tab {
        self.state.current_tab
    }

    pub fn search_history(&self) -> &[SearchHistoryEntry] {
        &self.state.search_history
    }

    pub fn location(&self) -> Option<&Location> {
        self.state.location.as_ref()
    }

    pub fn transactions(&self) -> &[govapp_model::Transaction] {
        &self.state.transactions
    }

    pub fn policies(&self) -> &[govapp_model::Policy] {
        &self.state.policies
    }

    pub fn common_transactions(&self) -> &'static [govapp_model::CommonTransaction] {
        self.state.common_transactions
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Sign `user` in, replacing any current user.
    pub fn login(&mut self, user: User) {
        tracing::debug!(user_id = %user.id, "login");
        self.state.user = Some(user);
        self.state.is_logged_in = true;
        self.commit(StateChange::LoggedIn);
    }

    /// Sign out.
    pub fn logout(&mut self) {
        tracing::debug!("logout");
        self.state.user = None;
        self.state.is_logged_in = false;
        self.commit(StateChange::LoggedOut);
    }

    /// Switch the current user to the government role, keeping every other
    /// field.
    ///
    /// Does nothing (no write, no notification) when nobody is signed in.
    /// Returns whether a user was switched.
    pub fn switch_to_government(&mut self) -> bool {
        let Some(user) = self.state.user.as_mut() else {
            tracing::debug!("switch_to_government ignored: no current user");
            return false;
        };
        user.user_type = UserType::Government;
        self.commit(StateChange::SwitchedToGovernment);
        true
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Show `tab`.
    pub fn set_current_tab(&mut self, tab: Tab) {
        let from = self.state.current_tab;
        self.state.current_tab = tab;
        self.commit(StateChange::TabChanged { from, to: tab });
    }

    // ========================================================================
    // Search history
    // ========================================================================

    /// Remember `query` as the most recent search.
    ///
    /// The list is trimmed to the configured history limit, never more than
    /// [`MAX_SEARCH_HISTORY`](crate::config::MAX_SEARCH_HISTORY) entries.
    /// Repeated queries are kept as separate entries.
    pub fn add_search_history(&mut self, query: impl Into<String>) {
        let entry = SearchHistoryEntry::new(query, self.time.now());
        let history = &mut self.state.search_history;
        history.insert(0, entry);
        history.truncate(self.config.history_limit());
        self.commit(StateChange::SearchHistoryAdded);
    }

    /// Forget all searches.
    pub fn clear_search_history(&mut self) {
        self.state.search_history.clear();
        self.commit(StateChange::SearchHistoryCleared);
    }

    // ========================================================================
    // Location
    // ========================================================================

    /// Replace the last-known location.
    pub fn set_location(&mut self, location: Option<Location>) {
        self.state.location = location;
        self.commit(StateChange::LocationChanged);
    }

    // ========================================================================
    // Generic update
    // ========================================================================

    /// Apply `update` to the state, then persist and notify as one change.
    pub fn set_state(&mut self, update: impl FnOnce(&mut AppState)) {
        update(&mut self.state);
        self.commit(StateChange::Replaced);
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Call `listener` after every change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&AppState, &StateChange) + 'static,
    ) -> SubscriptionId {
        self.subscribers.add(None, Box::new(listener))
    }

    /// Call `listener` only for changes to the given slices.
    pub fn subscribe_to(
        &mut self,
        slices: &[StateSlice],
        listener: impl FnMut(&AppState, &StateChange) + 'static,
    ) -> SubscriptionId {
        self.subscribers.add(Some(slices.to_vec()), Box::new(listener))
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Reload the persisted fields from storage and merge them over the
    /// current state.
    ///
    /// A missing record leaves the state untouched. An unreadable or
    /// foreign-version record is logged and ignored.
    pub fn rehydrate(&mut self) {
        match load_state(self.storage.as_ref(), &self.config.storage_key) {
            Ok(Some(persisted)) => {
                self.state.merge_persisted(persisted);
                self.hydrated = true;
                self.subscribers.notify(&self.state, &StateChange::Hydrated);
            }
            Ok(None) => {
                self.hydrated = true;
            }
            Err(e) => {
                self.hydrated = true;
                self.record_error("load", &e);
            }
        }
    }

    /// Whether a hydration attempt has finished.
    pub fn has_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Delete the persisted record. The in-memory state is unchanged.
    pub fn clear_storage(&mut self) {
        if let Err(e) = clear_state(self.storage.as_ref(), &self.config.storage_key) {
            self.record_error("clear", &e);
        }
    }

    /// Write the persisted slice now, surfacing any error.
    pub fn persist_now(&mut self) -> govapp_persistence::Result<()> {
        let result = save_state(
            self.storage.as_ref(),
            &self.config.storage_key,
            &self.state.persisted(),
        );
        match &result {
            Ok(()) => self.last_persistence_error = None,
            Err(e) => self.last_persistence_error = Some(e.user_message()),
        }
        result
    }

    /// User-facing message for the most recent storage failure, cleared by
    /// the next successful write.
    pub fn last_persistence_error(&self) -> Option<&str> {
        self.last_persistence_error.as_deref()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn commit(&mut self, change: StateChange) {
        if self.config.persist && change.slice().is_persisted() {
            if let Err(e) = self.persist_now() {
                self.record_error("save", &e);
            }
        }
        self.subscribers.notify(&self.state, &change);
    }

    fn record_error(&mut self, operation: &str, error: &PersistenceError) {
        tracing::warn!("Failed to {operation} persisted state: {error}");
        self.last_persistence_error = Some(error.user_message());
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("subscribers", &self.subscribers)
            .field("hydrated", &self.hydrated)
            .finish_non_exhaustive()
    }
}
