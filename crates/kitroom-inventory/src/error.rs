use kitroom_store::StoreError;
use kitroom_types::ValidationError;

/// Errors produced by inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The caller's input was rejected; nothing was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store failed; the operation was aborted.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// No further item id can be assigned.
    #[error("item id space exhausted")]
    IdSpaceExhausted,
}

impl InventoryError {
    /// Whether the error is the caller's fault rather than a system fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result alias for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
