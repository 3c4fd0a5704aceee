//! HTTP server for the kitroom inventory service.
//!
//! Exposes the inventory over a small JSON API and serves the browser
//! client from a directory. All state lives in a shared
//! [`Inventory`](kitroom_inventory::Inventory); handlers only decode,
//! delegate, and encode.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, DATABASE_URL_ENV};
pub use error::{ServerError, ServerResult};
pub use handler::{CreatedResponse, HealthResponse};
pub use router::build_router;
pub use server::KitroomServer;
