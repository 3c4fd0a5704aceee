//! Persistent backing store for the kitroom inventory service.
//!
//! The store is a mirror of the in-memory state, not its source of truth. It
//! is read once at startup to seed memory and then written synchronously on
//! every mutation.
//!
//! # Backends
//!
//! All backends implement the [`ItemStore`] trait:
//!
//! - [`PostgresStore`] -- pooled PostgreSQL connection with idempotent migrations
//! - [`InMemoryStore`] -- lock-guarded mirror for tests and embedding
//!
//! # Design Rules
//!
//! 1. Issuance records are append-only; nothing here updates or deletes them.
//! 2. `load_all` returns issuance records in insertion order.
//! 3. Errors are propagated to the caller, never retried.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod schema;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use traits::ItemStore;
