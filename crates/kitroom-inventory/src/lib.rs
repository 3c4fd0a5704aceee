//! Inventory and issuance state manager.
//!
//! [`Inventory`] is the authoritative read path of the service. It owns the
//! item map, the append-only issuance log, and the id counter behind one
//! lock, and mirrors every mutation to an optional [`ItemStore`].
//!
//! # Consistency rules
//!
//! 1. One lock covers items, the issuance log, and `next_id` together.
//! 2. Store writes happen while the lock is held, before memory changes.
//!    A failed store write leaves memory untouched.
//! 3. Validation happens before the lock is taken.
//!
//! [`ItemStore`]: kitroom_store::ItemStore

pub mod error;
pub mod inventory;

pub use error::{InventoryError, InventoryResult};
pub use inventory::Inventory;
