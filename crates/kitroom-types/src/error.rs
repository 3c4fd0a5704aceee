use thiserror::Error;

/// Client input that is malformed or violates a business rule.
///
/// The display strings are part of the HTTP contract: handlers return them
/// verbatim as the body of a `400 Bad Request`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("quantity must be non-negative")]
    NegativeQuantity,

    #[error("id must be non-negative")]
    NegativeId,

    /// A stored item carries an id of zero or below.
    #[error("id must be positive")]
    NonPositiveId,

    #[error("itemId must be positive")]
    NonPositiveItemId,

    #[error("person is required")]
    PersonRequired,

    #[error("issuedBy is required")]
    IssuedByRequired,

    /// The item does not exist or has nothing left to issue.
    #[error("item unavailable")]
    ItemUnavailable,
}
