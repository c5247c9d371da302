//! Journal record emitted by stock additions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_core::ItemName;

/// Event: stock was added.
///
/// Returned by [`crate::Stock::add`] instead of being appended to a
/// caller-supplied log sequence; callers that want an audit trail accumulate
/// these themselves, in whatever order the operations happened. Renders as a
/// timestamped human-readable line via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    /// Time-ordered event identifier.
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item: ItemName,
    pub qty: i64,
    /// Stock level immediately after the addition.
    pub new_level: i64,
}

impl StockAdded {
    /// Record an addition happening now.
    pub fn record(item: ItemName, qty: i64, new_level: i64) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            item,
            qty,
            new_level,
        }
    }
}

impl core::fmt::Display for StockAdded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.occurred_at, self.qty, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_timestamped_line() {
        let item = ItemName::new("apple").unwrap();
        let event = StockAdded::record(item, 10, 10);
        let line = event.to_string();
        assert!(line.ends_with(": Added 10 of apple"), "unexpected line: {line}");
    }

    #[test]
    fn event_ids_are_version_7() {
        let event = StockAdded::record(ItemName::new("apple").unwrap(), 1, 1);
        assert_eq!(event.event_id.get_version_num(), 7);
    }

    #[test]
    fn serde_round_trips() {
        let event = StockAdded::record(ItemName::new("pear").unwrap(), 3, 3);
        let json = serde_json::to_string(&event).unwrap();
        let back: StockAdded = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
