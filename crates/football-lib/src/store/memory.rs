//! In-memory [`ItemStore`] for tests and local runs.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::RwLock;

use super::{key_of, Item, ItemStore, ScanPage, StoreError, StoreOp, KEY_ATTRIBUTE};

type Table = BTreeMap<String, Item>;

/// Store backed by ordered maps wrapped in `Arc<RwLock<_>>`.
///
/// Clones share the same data, so a test can keep a handle while a gateway
/// owns another. Tables are created on first write; reading a table that was
/// never written behaves like an empty table. Data is lost on drop.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
    failing: Arc<RwLock<HashSet<StoreOp>>>,
    page_size: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit each scan to `page_size` items, reporting a continuation key
    /// when more remain.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Make every subsequent call of `op` fail.
    pub async fn fail_on(&self, op: StoreOp) {
        self.failing.write().await.insert(op);
    }

    /// Stop injecting failures for `op`.
    pub async fn recover(&self, op: StoreOp) {
        self.failing.write().await.remove(&op);
    }

    /// Store `item` under `key` without looking at its attributes.
    pub async fn insert_raw(&self, table: &str, key: &str, item: Item) {
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .insert(key.to_string(), item);
    }

    /// Number of items currently held by `table`.
    pub async fn len(&self, table: &str) -> usize {
        self.tables
            .read()
            .await
            .get(table)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }

    pub async fn is_empty(&self, table: &str) -> bool {
        self.len(table).await == 0
    }

    async fn check(&self, op: StoreOp) -> Result<(), StoreError> {
        if self.failing.read().await.contains(&op) {
            return Err(StoreError::RequestFailed {
                op,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>, StoreError> {
        self.check(StoreOp::GetItem).await?;
        let tables = self.tables.read().await;
        Ok(tables.get(table).and_then(|t| t.get(key)).cloned())
    }

    async fn scan(&self, table: &str) -> Result<ScanPage, StoreError> {
        self.check(StoreOp::Scan).await?;
        let tables = self.tables.read().await;
        let Some(rows) = tables.get(table) else {
            return Ok(ScanPage::default());
        };

        let limit = self.page_size.unwrap_or(usize::MAX);
        let items: Vec<Item> = rows.values().take(limit).cloned().collect();
        let last_evaluated_key = if rows.len() > items.len() {
            rows.keys().nth(items.len() - 1).map(|k| key_of(k))
        } else {
            None
        };

        Ok(ScanPage {
            items,
            last_evaluated_key,
        })
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<(), StoreError> {
        self.check(StoreOp::PutItem).await?;
        let key = match item.get(KEY_ATTRIBUTE) {
            Some(AttributeValue::S(key)) => key.clone(),
            _ => {
                return Err(StoreError::RequestFailed {
                    op: StoreOp::PutItem,
                    message: format!("item is missing string key attribute '{KEY_ATTRIBUTE}'"),
                })
            }
        };

        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .insert(key, item);
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: &str) -> Result<(), StoreError> {
        self.check(StoreOp::DeleteItem).await?;
        if let Some(rows) = self.tables.write().await.get_mut(table) {
            rows.remove(key);
        }
        Ok(())
    }
}
