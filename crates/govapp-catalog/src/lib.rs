//! Compiled-in reference catalogs.
//!
//! The front end ships three fixed tables: common-transaction guides,
//! sample in-progress transactions, and policy announcements. They are
//! embedded as JSON (see [`embedded`]), parsed once on first access, and
//! never modified at runtime.
//!
//! # Example
//!
//! ```rust,ignore
//! use govapp_catalog::{common_transactions, find_common_transaction};
//!
//! for guide in common_transactions() {
//!     println!("{} {}", guide.icon, guide.title);
//! }
//! let id_card = find_common_transaction("1").unwrap();
//! assert_eq!(id_card.category, "户政服务");
//! ```

pub mod embedded;
pub mod error;
mod lookup;
mod tables;

pub use error::{CatalogError, Result};
pub use lookup::{
    common_transaction_categories, common_transactions_in, find_common_transaction,
    find_policy, find_transaction, policies_in,
};
pub use tables::{
    common_transactions, default_policies, default_transactions, load_common_transactions,
    load_policies, load_transactions,
};
