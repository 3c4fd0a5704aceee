//! Data model for the kitroom inventory service.
//!
//! Every other kitroom crate depends on `kitroom-types`. The types here are
//! plain data: they carry their own input validation but no locking, storage,
//! or transport concerns.
//!
//! # Key Types
//!
//! - [`InventoryItem`]: a stocked item with its quantity on hand
//! - [`NewItem`]: candidate for insertion, optionally carrying an explicit id
//! - [`IssueRequest`]: request to hand one unit of an item to a person
//! - [`IssuedItem`]: immutable record of one issuance
//! - [`Snapshot`]: the full state, as loaded at startup or imported by `seed`

pub mod error;
pub mod issued;
pub mod item;
pub mod snapshot;

pub use error::ValidationError;
pub use issued::{IssueRequest, IssuedItem};
pub use item::{InventoryItem, ItemId, NewItem};
pub use snapshot::Snapshot;
