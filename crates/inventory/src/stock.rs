//! The authoritative item → quantity mapping and its operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, ItemName};

use crate::journal::StockAdded;

/// Threshold below which an item counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of a successful removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The entry survives with a positive level.
    Partial { remaining: i64 },
    /// The decrement drove the level to zero or below; the entry was deleted.
    Depleted,
}

/// The authoritative in-memory stock: item name → quantity.
///
/// Owned by the caller and passed by reference; there is no process-wide
/// instance. `stockroom-infra` replaces it wholesale on load and persists it
/// wholesale on save.
///
/// Levels are `i64`. Additions may create or leave non-positive levels;
/// removals delete any entry they drive to zero or below, so no entry ever
/// survives a removal at a non-positive level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock {
    items: BTreeMap<ItemName, i64>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of `item`, creating the entry at 0 if absent.
    ///
    /// Returns the journal event for the caller to accumulate. Fails (and
    /// leaves the stock untouched) on a blank item name or when the stored
    /// level would overflow.
    pub fn add(&mut self, item: &str, qty: i64) -> InventoryResult<StockAdded> {
        let item = match ItemName::new(item) {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!("rejected add of {qty}: {err}");
                return Err(err);
            }
        };

        let level = self.items.get(&item).copied().unwrap_or(0);
        let Some(new_level) = level.checked_add(qty) else {
            let err =
                InventoryError::validation(format!("stock level for '{item}' would overflow"));
            tracing::warn!("rejected add of {qty}: {err}");
            return Err(err);
        };

        self.items.insert(item.clone(), new_level);
        tracing::info!("added {qty} of {item} to stock");

        Ok(StockAdded::record(item, qty, new_level))
    }

    /// Remove `qty` of `item`.
    ///
    /// Fails on a blank name or an absent item, leaving the stock untouched.
    /// Otherwise the removal succeeds even when the level goes negative: any
    /// non-positive result deletes the entry entirely.
    pub fn remove(&mut self, item: &str, qty: i64) -> InventoryResult<Removal> {
        let item = match ItemName::new(item) {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!("rejected remove of {qty}: {err}");
                return Err(err);
            }
        };

        let Some(level) = self.items.get(&item).copied() else {
            tracing::warn!("item '{item}' not found in stock");
            return Err(InventoryError::not_found(item));
        };

        // Saturation only matters for absurd deltas; a non-positive result is
        // deleted either way.
        let new_level = level.saturating_sub(qty);
        tracing::info!("removed {qty} of {item} from stock");

        if new_level > 0 {
            self.items.insert(item, new_level);
            Ok(Removal::Partial { remaining: new_level })
        } else {
            self.items.remove(&item);
            tracing::info!("item '{item}' removed completely (level <= 0)");
            Ok(Removal::Depleted)
        }
    }

    /// Stored quantity of `item`, or 0 when absent. Never fails.
    pub fn quantity_of(&self, item: &str) -> i64 {
        ItemName::new(item)
            .ok()
            .and_then(|item| self.items.get(&item).copied())
            .unwrap_or(0)
    }

    /// Item names with a quantity strictly below `threshold`, in map order
    /// (ascending name).
    pub fn low_stock(&self, threshold: i64) -> Vec<ItemName> {
        let low: Vec<ItemName> = self
            .items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect();

        let names: Vec<&str> = low.iter().map(ItemName::as_str).collect();
        tracing::info!("low stock items (below {threshold}): {names:?}");

        low
    }

    /// One `"{item} -> {qty}"` line per entry, in map order.
    pub fn report_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|(item, qty)| format!("{item} -> {qty}"))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.items.iter().map(|(item, qty)| (item, *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(ItemName, i64)> for Stock {
    fn from_iter<I: IntoIterator<Item = (ItemName, i64)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
