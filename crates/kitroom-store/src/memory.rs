use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use kitroom_types::{InventoryItem, IssuedItem, ItemId, Snapshot};

use crate::error::{StoreError, StoreResult};
use crate::traits::ItemStore;

/// In-memory mirror store.
///
/// Intended for tests and embedding. Rows are held behind a `RwLock` and
/// cloned on read/write, the same way a database would hand back copies.
pub struct InMemoryStore {
    rows: RwLock<Rows>,
}

#[derive(Default)]
struct Rows {
    items: BTreeMap<ItemId, InventoryItem>,
    issued: Vec<IssuedItem>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows::default()),
        }
    }

    /// Create a store pre-filled with `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let rows = Rows {
            items: snapshot.items.into_iter().map(|item| (item.id, item)).collect(),
            issued: snapshot.issued,
        };
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Stored copy of one item.
    pub fn item(&self, id: ItemId) -> Option<InventoryItem> {
        self.rows.read().expect("lock poisoned").items.get(&id).cloned()
    }

    /// Number of item rows.
    pub fn item_count(&self) -> usize {
        self.rows.read().expect("lock poisoned").items.len()
    }

    /// Number of issuance rows.
    pub fn issued_count(&self) -> usize {
        self.rows.read().expect("lock poisoned").issued.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn load_all(&self) -> StoreResult<Snapshot> {
        let rows = self.rows.read().expect("lock poisoned");
        Ok(Snapshot::new(
            rows.items.values().cloned().collect(),
            rows.issued.clone(),
        ))
    }

    async fn upsert_item(&self, item: &InventoryItem) -> StoreResult<()> {
        let mut rows = self.rows.write().expect("lock poisoned");
        rows.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn decrement_quantity(&self, id: ItemId) -> StoreResult<()> {
        let mut rows = self.rows.write().expect("lock poisoned");
        let item = rows.items.get_mut(&id).ok_or(StoreError::MissingRow(id))?;
        item.quantity -= 1;
        Ok(())
    }

    async fn insert_issuance(&self, record: &IssuedItem) -> StoreResult<()> {
        let mut rows = self.rows.write().expect("lock poisoned");
        rows.issued.push(record.clone());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("item_count", &self.item_count())
            .field("issued_count", &self.issued_count())
            .finish()
    }
}
