//! Snapshot persistence for the stock mapping.
//!
//! A snapshot is the whole mapping serialized as one JSON object, item name
//! to quantity. Stores replace their previous contents on every save and
//! hand back a full replacement mapping on every load.

pub mod json_file;
pub mod memory;

pub use json_file::{DEFAULT_SNAPSHOT_PATH, JsonSnapshotStore};
pub use memory::MemorySnapshotStore;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use stockroom_inventory::Stock;

/// Error cases for snapshot persistence.
///
/// These are infrastructure failures, distinct from the domain errors in
/// `stockroom-core`. Every variant carries the path it happened on so the
/// caller can log something actionable.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No snapshot exists at the given path.
    #[error("snapshot not found: {path:?}")]
    NotFound { path: PathBuf },

    /// A snapshot exists but is not a valid item-to-quantity JSON object.
    #[error("invalid snapshot at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the snapshot failed at the I/O level.
    #[error("snapshot i/o failed at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Storage abstraction for stock snapshots.
pub trait SnapshotStore {
    /// Read the persisted snapshot back into a [`Stock`].
    fn load(&self) -> Result<Stock, SnapshotError>;

    /// Persist the full stock, overwriting any previous snapshot.
    fn save(&self, stock: &Stock) -> Result<(), SnapshotError>;
}

/// Load a snapshot, falling back to an empty stock on any failure.
///
/// A missing snapshot is normal on first run and only warns; a corrupt or
/// unreadable one logs an error. Either way the caller gets a usable empty
/// stock instead of an `Err`. Callers that need to distinguish the failure
/// use [`SnapshotStore::load`] directly.
pub fn load_or_empty<S: SnapshotStore>(store: &S) -> Stock {
    match store.load() {
        Ok(stock) => stock,
        Err(err @ SnapshotError::NotFound { .. }) => {
            tracing::warn!("{err}; starting with an empty stock");
            Stock::new()
        }
        Err(err) => {
            tracing::error!("{err}; starting with an empty stock");
            Stock::new()
        }
    }
}

/// Serialize a stock the way snapshots are written on disk: a pretty JSON
/// object indented with four spaces, terminated by a newline.
pub(crate) fn encode_snapshot(stock: &Stock) -> Result<Vec<u8>, serde_json::Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    stock.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
