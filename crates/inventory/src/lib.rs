//! Inventory domain module.
//!
//! This crate contains the business rules for stock keeping, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod journal;
pub mod stock;

pub use journal::StockAdded;
pub use stock::{DEFAULT_LOW_STOCK_THRESHOLD, Removal, Stock};
