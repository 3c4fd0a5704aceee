use std::sync::Arc;

use kitroom_inventory::Inventory;
use kitroom_store::PostgresStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Kitroom inventory server.
pub struct KitroomServer {
    config: ServerConfig,
    inventory: Arc<Inventory>,
}

impl KitroomServer {
    pub fn new(config: ServerConfig, inventory: Arc<Inventory>) -> Self {
        Self { config, inventory }
    }

    /// Build the inventory the configuration asks for.
    ///
    /// With a database URL the schema is migrated and the whole state is
    /// loaded from PostgreSQL; any failure here is fatal to startup.
    /// Without one the service runs purely in memory.
    pub async fn bootstrap(config: ServerConfig) -> ServerResult<Self> {
        let inventory = match &config.database_url {
            Some(url) => {
                let store = PostgresStore::connect(url)?;
                store.migrate().await?;
                Inventory::load(Arc::new(store)).await?
            }
            None => {
                tracing::info!("no database configured, running in memory");
                Inventory::in_memory()
            }
        };
        Ok(Self::new(config, Arc::new(inventory)))
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.inventory), &self.config.client_dir)
    }

    /// Serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            store = self.inventory.backend(),
            client_dir = %self.config.client_dir.display(),
            "kitroom server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}

/// Resolve once `signal` fires. If the handler cannot be installed, never
/// resolve, so the server keeps running instead of stopping at startup.
async fn wait_for_signal<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
