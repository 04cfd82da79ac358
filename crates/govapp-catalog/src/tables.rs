//! Parsed catalog tables.
//!
//! Each table is parsed from its embedded JSON the first time it is read
//! and then shared for the life of the process.

use std::sync::LazyLock;

use govapp_model::{CommonTransaction, Policy, Transaction};
use serde::de::DeserializeOwned;

use crate::embedded;
use crate::error::{CatalogError, Result};

static COMMON_TRANSACTIONS: LazyLock<Vec<CommonTransaction>> =
    LazyLock::new(|| parse_or_empty("common_transactions", embedded::COMMON_TRANSACTIONS));

static TRANSACTIONS: LazyLock<Vec<Transaction>> =
    LazyLock::new(|| parse_or_empty("transactions", embedded::TRANSACTIONS));

static POLICIES: LazyLock<Vec<Policy>> =
    LazyLock::new(|| parse_or_empty("policies", embedded::POLICIES));

/// Parse a table, surfacing errors.
fn parse<T: DeserializeOwned>(table: &'static str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { table, source })
}

/// Parse a table for the static accessors. A broken table is logged and
/// treated as empty.
fn parse_or_empty<T: DeserializeOwned>(table: &'static str, json: &str) -> Vec<T> {
    match parse(table, json) {
        Ok(rows) => {
            tracing::debug!(table, rows = rows.len(), "Loaded catalog");
            rows
        }
        Err(e) => {
            tracing::error!("{e}");
            Vec::new()
        }
    }
}

/// Load a fresh copy of the common-transaction guides.
pub fn load_common_transactions() -> Result<Vec<CommonTransaction>> {
    parse("common_transactions", embedded::COMMON_TRANSACTIONS)
}

/// Load a fresh copy of the default transactions.
pub fn load_transactions() -> Result<Vec<Transaction>> {
    parse("transactions", embedded::TRANSACTIONS)
}

/// Load a fresh copy of the policy announcements.
pub fn load_policies() -> Result<Vec<Policy>> {
    parse("policies", embedded::POLICIES)
}

/// The common-transaction guide catalog.
pub fn common_transactions() -> &'static [CommonTransaction] {
    &COMMON_TRANSACTIONS
}

/// The transactions a fresh store starts with.
pub fn default_transactions() -> &'static [Transaction] {
    &TRANSACTIONS
}

/// The policies a fresh store starts with.
pub fn default_policies() -> &'static [Policy] {
    &POLICIES
}
