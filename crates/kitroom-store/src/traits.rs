use async_trait::async_trait;
use kitroom_types::{InventoryItem, IssuedItem, ItemId, Snapshot};

use crate::error::StoreResult;

/// Durable mirror of the inventory state.
///
/// Implementations must satisfy these invariants:
/// - `load_all` returns issuance records in the order they were inserted.
/// - `upsert_item` is keyed by `InventoryItem::id`; a second write with the
///   same id replaces every column.
/// - Issuance records are never updated or deleted.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Read every item and issuance record. Used once at startup.
    async fn load_all(&self) -> StoreResult<Snapshot>;

    /// Insert the item, or overwrite the row that already has its id.
    async fn upsert_item(&self, item: &InventoryItem) -> StoreResult<()>;

    /// Take one unit off the item's stored quantity.
    ///
    /// Returns [`StoreError::MissingRow`](crate::StoreError::MissingRow) if
    /// no row has that id.
    async fn decrement_quantity(&self, id: ItemId) -> StoreResult<()>;

    /// Append an issuance record.
    async fn insert_issuance(&self, record: &IssuedItem) -> StoreResult<()>;

    /// Write a whole snapshot: upsert every item, then append every record.
    ///
    /// Default implementation calls `upsert_item` and `insert_issuance` one
    /// at a time. Backends may override to batch or wrap in a transaction.
    async fn populate(&self, snapshot: &Snapshot) -> StoreResult<()> {
        for item in &snapshot.items {
            self.upsert_item(item).await?;
        }
        for record in &snapshot.issued {
            self.insert_issuance(record).await?;
        }
        Ok(())
    }

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
