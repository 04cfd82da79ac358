//! Catalog lookups.

use govapp_model::{CommonTransaction, Policy, Transaction};

use crate::tables::{common_transactions, default_policies, default_transactions};

/// Find a common-transaction guide by id.
pub fn find_common_transaction(id: &str) -> Option<&'static CommonTransaction> {
    common_transactions().iter().find(|c| c.id == id)
}

/// Guides in a service category, in catalog order.
pub fn common_transactions_in(category: &str) -> Vec<&'static CommonTransaction> {
    common_transactions()
        .iter()
        .filter(|c| c.category == category)
        .collect()
}

/// Distinct guide categories in order of first appearance.
pub fn common_transaction_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for guide in common_transactions() {
        if !categories.contains(&guide.category.as_str()) {
            categories.push(&guide.category);
        }
    }
    categories
}

/// Find a default transaction by id.
pub fn find_transaction(id: &str) -> Option<&'static Transaction> {
    default_transactions().iter().find(|t| t.id == id)
}

/// Find a policy by id.
pub fn find_policy(id: &str) -> Option<&'static Policy> {
    default_policies().iter().find(|p| p.id == id)
}

/// Policies in a category, in catalog order.
pub fn policies_in(category: &str) -> Vec<&'static Policy> {
    default_policies()
        .iter()
        .filter(|p| p.category == category)
        .collect()
}
