use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of an inventory item. Matches the `INT` primary key column.
pub type ItemId = i32;

/// A stocked item and its quantity on hand.
///
/// Descriptive fields are optional; `None` and `Some("")` are distinct and
/// both survive a trip through the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    #[serde(default)]
    pub uniform_type: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    pub name: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    pub quantity: i32,
}

impl InventoryItem {
    /// Minimal item with only the required fields set.
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id,
            uniform_type: None,
            gender: None,
            name: name.into(),
            style: None,
            size: None,
            quantity,
        }
    }

    /// Whether at least one unit can be issued.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// Candidate item submitted for insertion.
///
/// `id` of `None` or `Some(0)` asks for an assigned id; a positive id is used
/// as-is and overwrites any existing item with that id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub uniform_type: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub quantity: i32,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
            ..Self::default()
        }
    }

    /// Builder-style explicit id.
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// The caller-supplied id, if one was given. Zero counts as unset.
    pub fn explicit_id(&self) -> Option<ItemId> {
        self.id.filter(|id| *id != 0)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }
        if matches!(self.id, Some(id) if id < 0) {
            return Err(ValidationError::NegativeId);
        }
        Ok(())
    }

    /// Materialize the candidate under its final id.
    pub fn into_item(self, id: ItemId) -> InventoryItem {
        InventoryItem {
            id,
            uniform_type: self.uniform_type,
            gender: self.gender,
            name: self.name,
            style: self.style,
            size: self.size,
            quantity: self.quantity,
        }
    }
}
