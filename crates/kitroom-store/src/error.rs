use kitroom_types::ItemId;

/// Errors from backing store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The connection pool could not be built from the configuration.
    #[error("invalid store configuration: {0}")]
    Config(#[from] deadpool_postgres::CreatePoolError),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// A statement failed on the database side.
    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// A write targeted an item row that does not exist in the store.
    #[error("item {0} not found in store")]
    MissingRow(ItemId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
