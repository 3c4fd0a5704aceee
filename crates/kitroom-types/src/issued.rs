use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::item::{InventoryItem, ItemId};

/// Request to hand one unit of an item to a person.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRequest {
    #[serde(default)]
    pub item_id: ItemId,
    #[serde(default)]
    pub person: String,
    #[serde(default)]
    pub issued_by: String,
}

impl IssueRequest {
    pub fn new(item_id: ItemId, person: impl Into<String>, issued_by: impl Into<String>) -> Self {
        Self {
            item_id,
            person: person.into(),
            issued_by: issued_by.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.item_id <= 0 {
            return Err(ValidationError::NonPositiveItemId);
        }
        if self.person.trim().is_empty() {
            return Err(ValidationError::PersonRequired);
        }
        if self.issued_by.trim().is_empty() {
            return Err(ValidationError::IssuedByRequired);
        }
        Ok(())
    }
}

/// Immutable record of one issuance.
///
/// `item_name` is a snapshot of the item's name at issuance time, and
/// `item_id` may outlive the item it points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedItem {
    pub item_id: ItemId,
    pub item_name: String,
    pub person: String,
    pub issued_by: String,
    pub issued_at: DateTime<Utc>,
}

impl IssuedItem {
    /// Record the issuance of `item` described by `request`, stamped `issued_at`.
    pub fn record(item: &InventoryItem, request: &IssueRequest, issued_at: DateTime<Utc>) -> Self {
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            person: request.person.clone(),
            issued_by: request.issued_by.clone(),
            issued_at,
        }
    }
}
