//! Error types for catalog and screen operations

use thiserror::Error;

/// Errors raised when a caller breaks a screen contract or a collaborator
/// cannot be reached.
///
/// Business failures reported by the cart and auth collaborators are not
/// errors; they travel as tagged outcomes and end up in a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// The label is not one of the fixed catalog categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Two products in one collection share an identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// The identifier does not reference a product in the active collection
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The add-to-cart affordance is disabled for products without stock
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// The catalog source failed to deliver a product collection
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for catalog and screen operations
pub type ShopResult<T> = Result<T, ShopError>;
