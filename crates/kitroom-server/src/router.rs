use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use kitroom_inventory::Inventory;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Build the axum router with the JSON API and the static client.
///
/// Unknown methods on API paths get `405`; any path outside the API is
/// looked up in `client_dir`.
pub fn build_router(inventory: Arc<Inventory>, client_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/inventory",
            get(handler::list_inventory).post(handler::add_item),
        )
        .route("/issue", post(handler::issue_item))
        .route("/issued", get(handler::list_issued))
        .route("/healthz", get(handler::health_handler))
        .fallback_service(ServeDir::new(client_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(inventory)
}
