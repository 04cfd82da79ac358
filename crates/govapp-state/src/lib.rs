//! Application state store for the government services front end.
//!
//! The store holds the user session, the active tab, recent searches, the
//! last-known location and the reference catalogs. UI code reads the
//! current [`AppState`], calls mutators on [`Store`], and subscribes to
//! changes.
//!
//! # Architecture
//!
//! - **AppState**: root state, persisted slice plus catalogs
//! - **Store**: mutators, persistence wiring, observers
//! - **Tab**: closed set of top-level screens
//! - **StoreConfig**: storage key, history limit, storage location
//!
//! # Example
//!
//! ```rust,ignore
//! use govapp_state::{Store, StoreConfig, Tab};
//! use govapp_model::User;
//!
//! let mut store = Store::open(StoreConfig::load());
//! store.subscribe(|state, change| println!("{change:?}: logged in = {}", state.is_logged_in));
//!
//! store.login(User::new("1", "张三", "13800000000"));
//! store.add_search_history("身份证");
//! store.set_current_tab(Tab::Services);
//! ```

mod app_state;
pub mod config;
mod navigation;
mod store;
mod subscription;
mod time;

pub use app_state::AppState;
pub use config::{ConfigError, MAX_SEARCH_HISTORY, StoreConfig};
pub use navigation::Tab;
pub use store::Store;
pub use subscription::{Listener, StateChange, StateSlice, SubscriptionId};
pub use time::{ManualTimeSource, SystemTimeSource, TimeSource};
