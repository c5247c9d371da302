//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod item;

pub use error::{InventoryError, InventoryResult};
pub use item::ItemName;
