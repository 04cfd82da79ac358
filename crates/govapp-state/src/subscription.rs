//! # Change notification
//!
//! Observers register a callback with the store and are called
//! synchronously after every effective mutation, in registration order.
//! Each call receives the new state and a [`StateChange`] naming what
//! happened. A subscription can be narrowed to a set of [`StateSlice`]s.

use crate::app_state::AppState;
use crate::navigation::Tab;

/// Region of the state a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateSlice {
    /// User and logged-in flag
    Session,
    /// Current tab
    Navigation,
    SearchHistory,
    Location,
    /// Arbitrary replacement; matches every filter
    All,
}

impl StateSlice {
    /// Whether changes to this slice are written to storage.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, Self::Navigation)
    }
}

/// What a mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    LoggedIn,
    LoggedOut,
    SwitchedToGovernment,
    TabChanged { from: Tab, to: Tab },
    SearchHistoryAdded,
    SearchHistoryCleared,
    LocationChanged,
    /// State replaced through `Store::set_state`
    Replaced,
    /// Persisted fields loaded from storage
    Hydrated,
}

impl StateChange {
    /// The slice this change belongs to.
    pub fn slice(&self) -> StateSlice {
        match self {
            Self::LoggedIn | Self::LoggedOut | Self::SwitchedToGovernment => StateSlice::Session,
            Self::TabChanged { .. } => StateSlice::Navigation,
            Self::SearchHistoryAdded | Self::SearchHistoryCleared => StateSlice::SearchHistory,
            Self::LocationChanged => StateSlice::Location,
            Self::Replaced | Self::Hydrated => StateSlice::All,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Observer callback.
pub type Listener = Box<dyn FnMut(&AppState, &StateChange)>;

struct Entry {
    id: SubscriptionId,
    /// `None` receives everything.
    filter: Option<Vec<StateSlice>>,
    listener: Listener,
}

impl Entry {
    fn wants(&self, slice: StateSlice) -> bool {
        match &self.filter {
            None => true,
            Some(slices) => {
                slice == StateSlice::All
                    || slices.contains(&StateSlice::All)
                    || slices.contains(&slice)
            }
        }
    }
}

/// Registered observers.
#[derive(Default)]
pub(crate) struct Subscribers {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Subscribers {
    pub(crate) fn add(
        &mut self,
        filter: Option<Vec<StateSlice>>,
        listener: Listener,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            filter,
            listener,
        });
        tracing::debug!(id = id.0, "New subscription created");
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(id = id.0, "Subscription removed");
        }
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Call every interested listener. Returns how many were called.
    pub(crate) fn notify(&mut self, state: &AppState, change: &StateChange) -> usize {
        let slice = change.slice();
        let mut called = 0;
        for entry in self.entries.iter_mut().filter(|e| e.wants(slice)) {
            (entry.listener)(state, change);
            called += 1;
        }
        called
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn filters_by_slice() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::default();

        let log = Rc::clone(&seen);
        subs.add(
            Some(vec![StateSlice::SearchHistory]),
            Box::new(move |_, change| log.borrow_mut().push(change.clone())),
        );

        let state = AppState::default();
        assert_eq!(subs.notify(&state, &StateChange::LoggedIn), 0);
        assert_eq!(subs.notify(&state, &StateChange::SearchHistoryCleared), 1);
        assert_eq!(subs.notify(&state, &StateChange::Hydrated), 1);

        assert_eq!(
            *seen.borrow(),
            [StateChange::SearchHistoryCleared, StateChange::Hydrated]
        );
    }

    #[test]
    fn ids_are_not_reused() {
        let mut subs = Subscribers::default();
        let a = subs.add(None, Box::new(|_, _| {}));
        assert!(subs.remove(a));
        let b = subs.add(None, Box::new(|_, _| {}));
        assert_ne!(a, b);
        assert!(!subs.remove(a));
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn navigation_is_not_persisted() {
        assert!(!StateChange::TabChanged {
            from: Tab::Home,
            to: Tab::Profile
        }
        .slice()
        .is_persisted());
        assert!(StateChange::LoggedOut.slice().is_persisted());
        assert!(StateChange::Replaced.slice().is_persisted());
    }
}
