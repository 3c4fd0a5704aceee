use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::issued::IssuedItem;
use crate::item::{InventoryItem, ItemId};

/// Full inventory state: every item plus the issuance log in append order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub issued: Vec<IssuedItem>,
}

impl Snapshot {
    pub fn new(items: Vec<InventoryItem>, issued: Vec<IssuedItem>) -> Self {
        Self { items, issued }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.issued.is_empty()
    }

    /// Highest item id present, if any.
    pub fn max_item_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    /// Check every item against the rules enforced on insertion, plus a
    /// positive id since snapshot items are never assigned one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.items {
            if item.id <= 0 {
                return Err(ValidationError::NonPositiveId);
            }
            if item.name.trim().is_empty() {
                return Err(ValidationError::NameRequired);
            }
            if item.quantity < 0 {
                return Err(ValidationError::NegativeQuantity);
            }
        }
        Ok(())
    }

    /// Parse a snapshot from its JSON form.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}
