//! Hydration and persistence of the store.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use govapp_model::{Location, TransactionStatus, User};
use govapp_persistence::{
    DEFAULT_STORAGE_KEY, FileStorage, MemoryStorage, PersistenceError, StorageBackend,
    load_state,
};
use govapp_state::{ManualTimeSource, StateChange, Store, StoreConfig, Tab};
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> StoreConfig {
    StoreConfig::default().with_storage_dir(dir)
}

#[test]
fn persisted_fields_survive_restart_and_others_reset() {
    let dir = tempdir().unwrap();
    let clock = Arc::new(ManualTimeSource::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    ));

    let before = {
        let mut store = Store::open(config_in(dir.path())).with_time_source(Arc::clone(&clock));
        store.login(User::new("1", "张三", "13800000000"));
        store.switch_to_government();
        store.add_search_history("身份证");
        clock.advance(Duration::milliseconds(1500));
        store.add_search_history("营业执照");
        store.set_location(Some(Location::new(39.9, 116.4).with_address("东城区")));
        store.set_current_tab(Tab::Profile);
        store.set_state(|state| {
            state.transactions[0].status = TransactionStatus::Completed;
            state.policies.clear();
        });
        store.state().clone()
    };

    let reopened = Store::open(config_in(dir.path()));
    let after = reopened.state();

    assert!(reopened.has_hydrated());
    assert_eq!(after.user, before.user);
    assert_eq!(after.is_logged_in, before.is_logged_in);
    assert_eq!(after.search_history, before.search_history);
    assert_eq!(after.location, before.location);

    assert_eq!(after.current_tab, Tab::Home);
    assert_eq!(after.transactions[0].status, TransactionStatus::Processing);
    assert_eq!(after.policies.len(), 2);
    assert_eq!(after.common_transactions.len(), 5);
}

#[test]
fn location_coordinates_reload_exactly() {
    let coordinates = [
        (0.0, 94.57886768429161),
        (31.230416, 121.473701),
        (-33.868820309454735, 151.20929953128003),
        (1.1763008042333735e272, -0.1),
        (f64::MIN_POSITIVE, f64::MAX),
    ];

    for (latitude, longitude) in coordinates {
        let storage = MemoryStorage::new();
        let location = Location::new(latitude, longitude).with_city("测试");
        let mut store = Store::with_storage(StoreConfig::default(), storage.clone());
        store.set_location(Some(location.clone()));

        let reopened = Store::with_storage(StoreConfig::default(), storage);
        let restored = reopened.location().unwrap();
        assert_eq!(restored.latitude.to_bits(), latitude.to_bits());
        assert_eq!(restored.longitude.to_bits(), longitude.to_bits());
        assert_eq!(restored, &location);
    }
}

#[test]
fn stored_user_without_phone_still_hydrates() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"state":{"isLoggedIn":true,"user":{"id":"8"},"searchHistory":[{"id":"1","query":"护照","timestamp":"2024-01-15T08:30:00Z"}]},"version":0}"#,
        )
        .unwrap();

    let store = Store::with_storage(StoreConfig::default(), storage);

    assert!(store.last_persistence_error().is_none());
    assert_eq!(store.user().map(|u| u.id.as_str()), Some("8"));
    assert_eq!(store.user().map(|u| u.phone.as_str()), Some(""));
    assert_eq!(store.search_history().len(), 1);
}

#[test]
fn every_persisted_mutation_is_written() {
    let storage = MemoryStorage::new();
    let mut store = Store::with_storage(StoreConfig::default(), storage.clone());

    store.login(User::new("9", "王五", "13700000000"));
    let saved = load_state(&storage, DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(saved.is_logged_in);

    store.add_search_history("驾驶证");
    let saved = load_state(&storage, DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(saved.search_history.len(), 1);

    store.logout();
    let saved = load_state(&storage, DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(!saved.is_logged_in);
    assert!(saved.user.is_none());
    assert_eq!(saved.search_history.len(), 1);
}

#[test]
fn tab_changes_are_not_written() {
    let storage = MemoryStorage::new();
    let mut store = Store::with_storage(StoreConfig::default(), storage.clone());

    store.set_current_tab(Tab::Policies);

    assert!(storage.is_empty());
}

#[test]
fn in_memory_config_never_touches_storage() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"state":{"isLoggedIn":true},"version":0}"#,
        )
        .unwrap();

    let mut store = Store::with_storage(StoreConfig::in_memory(), storage.clone());
    assert!(!store.is_logged_in());
    assert!(!store.has_hydrated());

    store.logout();
    let raw = storage.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains(r#""isLoggedIn":true"#));
}

#[test]
fn partial_record_merges_with_defaults() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"state":{"isLoggedIn":true,"user":{"id":"3","name":"赵六","phone":"1"}},"version":0}"#,
        )
        .unwrap();

    let store = Store::with_storage(StoreConfig::default(), storage);

    assert!(store.is_logged_in());
    assert_eq!(store.user().map(|u| u.name.as_str()), Some("赵六"));
    assert!(store.search_history().is_empty());
    assert!(store.location().is_none());
}

#[test]
fn corrupt_record_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage.set_item(DEFAULT_STORAGE_KEY, "{{{").unwrap();

    let store = Store::with_storage(StoreConfig::default(), storage);

    assert!(store.has_hydrated());
    assert!(!store.is_logged_in());
    assert!(store.last_persistence_error().is_some());
}

#[test]
fn foreign_version_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"{"state":{"isLoggedIn":true},"version":7}"#,
        )
        .unwrap();

    let store = Store::with_storage(StoreConfig::default(), storage);

    assert!(!store.is_logged_in());
    assert!(store.last_persistence_error().unwrap().contains('7'));
}

#[test]
fn rehydrate_notifies_observers() {
    let storage = MemoryStorage::new();
    let mut store = Store::with_storage(StoreConfig::default(), storage.clone());

    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let log = std::rc::Rc::clone(&seen);
    store.subscribe(move |state, change| log.borrow_mut().push((change.clone(), state.is_logged_in)));

    // Another writer updates the record.
    let mut other = Store::with_storage(StoreConfig::default(), storage);
    other.login(User::new("5", "孙七", "2"));

    store.rehydrate();

    assert!(store.is_logged_in());
    assert_eq!(*seen.borrow(), [(StateChange::Hydrated, true)]);
}

#[test]
fn clear_storage_keeps_memory_state() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(config_in(dir.path()));
    store.login(User::new("1", "a", "b"));

    store.clear_storage();

    assert!(store.is_logged_in());
    assert!(!FileStorage::new(dir.path()).path_for(DEFAULT_STORAGE_KEY).exists());
    assert!(!Store::open(config_in(dir.path())).is_logged_in());
}

/// Backend whose writes always fail.
struct ReadOnlyStorage;

impl StorageBackend for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> govapp_persistence::Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, key: &str, _value: &str) -> govapp_persistence::Result<()> {
        Err(PersistenceError::Io {
            operation: "write",
            path: key.into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn remove_item(&self, _key: &str) -> govapp_persistence::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_non_fatal() {
    let mut store = Store::with_storage(StoreConfig::default(), ReadOnlyStorage);
    let notified = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = std::rc::Rc::clone(&notified);
    store.subscribe(move |_, _| flag.set(true));

    store.login(User::new("1", "a", "b"));

    assert!(store.is_logged_in());
    assert!(notified.get());
    assert!(store.last_persistence_error().is_some());
    assert!(store.persist_now().is_err());
}

#[test]
fn custom_storage_key_is_used() {
    let storage = MemoryStorage::new();
    let config = StoreConfig {
        storage_key: "gov-test".to_string(),
        ..StoreConfig::default()
    };
    let mut store = Store::with_storage(config, storage.clone());
    store.login(User::new("1", "a", "b"));

    assert!(storage.get_item("gov-test").unwrap().is_some());
    assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
}
