use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kitroom_store::ItemStore;
use kitroom_types::{
    InventoryItem, IssueRequest, IssuedItem, ItemId, NewItem, Snapshot, ValidationError,
};
use tokio::sync::Mutex;

use crate::error::{InventoryError, InventoryResult};

/// In-memory inventory state mirrored to an optional backing store.
///
/// Construct once per process and share as `Arc<Inventory>`.
pub struct Inventory {
    store: Option<Arc<dyn ItemStore>>,
    state: Mutex<InventoryState>,
}

struct InventoryState {
    items: HashMap<ItemId, InventoryItem>,
    issued: Vec<IssuedItem>,
    // Wider than `ItemId` so an item at `ItemId::MAX` can still be stored.
    next_id: i64,
}

impl InventoryState {
    fn from_snapshot(snapshot: Snapshot) -> Self {
        let next_id = snapshot
            .max_item_id()
            .map_or(1, |max| i64::from(max) + 1)
            .max(1);
        Self {
            items: snapshot.items.into_iter().map(|item| (item.id, item)).collect(),
            issued: snapshot.issued,
            next_id,
        }
    }

    fn sorted_items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self.items.values().cloned().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot::new(self.sorted_items(), self.issued.clone())
    }
}

impl Inventory {
    /// Empty inventory with no persistence.
    pub fn in_memory() -> Self {
        Self::from_snapshot(Snapshot::default(), None)
    }

    /// Seed memory from `snapshot`, mirroring later writes to `store`.
    pub fn from_snapshot(snapshot: Snapshot, store: Option<Arc<dyn ItemStore>>) -> Self {
        Self {
            store,
            state: Mutex::new(InventoryState::from_snapshot(snapshot)),
        }
    }

    /// Load the full state from `store` and keep mirroring to it.
    ///
    /// A failure here means the process cannot start.
    pub async fn load(store: Arc<dyn ItemStore>) -> InventoryResult<Self> {
        let snapshot = store.load_all().await?;
        tracing::info!(
            backend = store.backend(),
            items = snapshot.items.len(),
            issued = snapshot.issued.len(),
            "inventory loaded from store"
        );
        Ok(Self::from_snapshot(snapshot, Some(store)))
    }

    /// Name of the mirroring backend, or `"memory"` when there is none.
    pub fn backend(&self) -> &'static str {
        self.store.as_ref().map_or("memory", |store| store.backend())
    }

    /// Copy of every item, ordered by id.
    pub async fn list_items(&self) -> Vec<InventoryItem> {
        self.state.lock().await.sorted_items()
    }

    /// Insert or overwrite an item and return its id.
    ///
    /// Candidates without an id get the next counter value. Candidates with
    /// an explicit id replace whatever item had it, and push the counter past
    /// that id so later assignments never collide with it.
    pub async fn add_item(&self, candidate: NewItem) -> InventoryResult<ItemId> {
        candidate.validate()?;

        let mut state = self.state.lock().await;
        let id = match candidate.explicit_id() {
            Some(id) => id,
            None => ItemId::try_from(state.next_id)
                .map_err(|_| InventoryError::IdSpaceExhausted)?,
        };
        let item = candidate.into_item(id);

        if let Some(store) = &self.store {
            if let Err(e) = store.upsert_item(&item).await {
                tracing::error!(id, error = %e, "failed to persist item");
                return Err(e.into());
            }
        }

        state.next_id = state.next_id.max(i64::from(id) + 1);
        state.items.insert(id, item);
        tracing::debug!(id, "item stored");
        Ok(id)
    }

    /// Hand one unit of an item to a person and return the new record.
    ///
    /// A missing item and an out-of-stock item are the same error,
    /// [`ValidationError::ItemUnavailable`]. The store sees the quantity
    /// update and then the record insert; memory changes only after both
    /// succeed.
    pub async fn issue_item(&self, request: IssueRequest) -> InventoryResult<IssuedItem> {
        request.validate()?;

        let mut state = self.state.lock().await;
        let record = match state.items.get(&request.item_id) {
            Some(item) if item.is_available() => IssuedItem::record(item, &request, Utc::now()),
            _ => return Err(ValidationError::ItemUnavailable.into()),
        };

        if let Some(store) = &self.store {
            if let Err(e) = store.decrement_quantity(record.item_id).await {
                tracing::error!(item_id = record.item_id, error = %e, "failed to persist quantity");
                return Err(e.into());
            }
            // The quantity update above is not undone if this fails.
            if let Err(e) = store.insert_issuance(&record).await {
                tracing::error!(item_id = record.item_id, error = %e, "failed to persist issuance");
                return Err(e.into());
            }
        }

        if let Some(item) = state.items.get_mut(&record.item_id) {
            item.quantity -= 1;
        }
        state.issued.push(record.clone());
        tracing::debug!(item_id = record.item_id, person = %record.person, "item issued");
        Ok(record)
    }

    /// Copy of the issuance log in the order records were created.
    pub async fn list_issued(&self) -> Vec<IssuedItem> {
        self.state.lock().await.issued.clone()
    }

    /// Copy of the whole state taken under one lock acquisition.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.lock().await.to_snapshot()
    }

    /// Write the whole in-memory state to the store. No-op without a store.
    pub async fn persist_all(&self) -> InventoryResult<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        let state = self.state.lock().await;
        store.populate(&state.to_snapshot()).await?;
        Ok(())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("backend", &self.backend())
            .finish_non_exhaustive()
    }
}
