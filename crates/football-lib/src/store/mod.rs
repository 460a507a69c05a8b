//! Key-value store abstraction.
//!
//! The gateway only needs four primitives from its backing store: point get,
//! full scan, unconditional put and delete, all keyed by the string attribute
//! [`KEY_ATTRIBUTE`]. [`DynamoDbStore`] talks to AWS; [`InMemoryStore`] backs
//! tests and local runs.

mod dynamodb;
mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

pub use dynamodb::DynamoDbStore;
pub use memory::InMemoryStore;

/// Name of the partition key attribute.
pub const KEY_ATTRIBUTE: &str = "id";

/// A stored record in DynamoDB's attribute representation.
pub type Item = HashMap<String, AttributeValue>;

/// The store primitives, used to label errors and inject faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    GetItem,
    Scan,
    PutItem,
    DeleteItem,
}

impl std::fmt::Display for StoreOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreOp::GetItem => "GetItem",
            StoreOp::Scan => "Scan",
            StoreOp::PutItem => "PutItem",
            StoreOp::DeleteItem => "DeleteItem",
        };
        f.write_str(name)
    }
}

/// Errors raised by a store primitive.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{op}: table {table} not found")]
    TableNotFound { op: StoreOp, table: String },

    #[error("{op}: throughput exceeded, please retry")]
    Throttled { op: StoreOp },

    #[error("{op}: request failed: {message}")]
    RequestFailed { op: StoreOp, message: String },

    #[error("{op}: connection failed: {message}")]
    ConnectionFailed { op: StoreOp, message: String },
}

/// One page of scan results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Item>,
    /// Present when the store holds more items than this page returned.
    pub last_evaluated_key: Option<Item>,
}

impl ScanPage {
    pub fn is_truncated(&self) -> bool {
        self.last_evaluated_key.is_some()
    }
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Point lookup by key. `Ok(None)` when the key holds no item.
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>, StoreError>;

    /// Read the first page of the whole table.
    async fn scan(&self, table: &str) -> Result<ScanPage, StoreError>;

    /// Create or fully replace the item under its key.
    async fn put_item(&self, table: &str, item: Item) -> Result<(), StoreError>;

    /// Remove the item under `key`. Removing an absent key succeeds.
    async fn delete_item(&self, table: &str, key: &str) -> Result<(), StoreError>;
}

/// Build the key map for `key`.
pub fn key_of(key: &str) -> Item {
    let mut map = Item::with_capacity(1);
    map.insert(KEY_ATTRIBUTE.to_string(), AttributeValue::S(key.to_string()));
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_map_uses_id_attribute() {
        let key = key_of("abc");
        assert_eq!(key.get("id"), Some(&AttributeValue::S("abc".to_string())));
        assert_eq!(key.len(), 1);
    }

    #[test]
    fn store_error_names_operation() {
        let err = StoreError::TableNotFound {
            op: StoreOp::Scan,
            table: "players".to_string(),
        };
        assert_eq!(err.to_string(), "Scan: table players not found");
    }

    #[test]
    fn scan_page_reports_truncation() {
        let mut page = ScanPage::default();
        assert!(!page.is_truncated());
        page.last_evaluated_key = Some(key_of("abc"));
        assert!(page.is_truncated());
    }
}
