//! Data model for the government services front end.
//!
//! The types here mirror the JSON records the front end exchanges and
//! persists, so every struct serializes with camelCase field names and every
//! enum with lowercase variants.
//!
//! - [`user`]: session user and role
//! - [`search`]: search history entries
//! - [`location`]: last-known position
//! - [`transaction`]: in-progress transactions and their steps
//! - [`policy`]: policy announcements
//! - [`guide`]: common-transaction guides

pub mod guide;
pub mod location;
pub mod policy;
pub mod search;
pub mod transaction;
pub mod user;

pub use guide::CommonTransaction;
pub use location::Location;
pub use policy::Policy;
pub use search::SearchHistoryEntry;
pub use transaction::{Step, StepStatus, Transaction, TransactionStatus};
pub use user::{User, UserType};
