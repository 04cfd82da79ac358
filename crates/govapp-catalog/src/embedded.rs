//! Embedded reference data.
//!
//! All catalogs are embedded at compile time using `include_str!()`, so the
//! app needs no data files at runtime.
//!
//! To change a catalog, edit the JSON under `data/` and rebuild. The field
//! names follow the front end's camelCase record shape.

/// Common-transaction guides (身份证, 驾驶证, 结婚登记, 社保卡, 营业执照).
pub const COMMON_TRANSACTIONS: &str = include_str!("../data/common_transactions.json");

/// Sample in-progress transactions shown on the progress tab.
pub const TRANSACTIONS: &str = include_str!("../data/transactions.json");

/// Policy announcements.
pub const POLICIES: &str = include_str!("../data/policies.json");
