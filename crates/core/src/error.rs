//! Domain error model.

use thiserror::Error;

use crate::item::ItemName;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation, missing
/// items). Persistence concerns belong to `stockroom-infra`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A value failed validation (e.g. blank item name, overflowing level).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not present in stock.
    #[error("item not found: {0}")]
    NotFound(ItemName),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: ItemName) -> Self {
        Self::NotFound(item)
    }
}
