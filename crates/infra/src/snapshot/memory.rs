//! In-memory snapshot store for tests and development.

use std::path::PathBuf;
use std::sync::RwLock;

use stockroom_inventory::Stock;

use super::{SnapshotError, SnapshotStore, encode_snapshot};

/// Snapshot store that keeps the encoded bytes in memory.
///
/// It runs the same encode and decode path as the file-backed store, so a
/// fresh store behaves like a missing file. Errors report the synthetic
/// path `<memory>`.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: RwLock<Option<Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn pseudo_path() -> PathBuf {
        PathBuf::from("<memory>")
    }

    fn poisoned() -> SnapshotError {
        SnapshotError::Io {
            path: Self::pseudo_path(),
            source: std::io::Error::other("snapshot lock poisoned"),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Stock, SnapshotError> {
        let guard = self.snapshot.read().map_err(|_| Self::poisoned())?;
        let Some(bytes) = guard.as_deref() else {
            return Err(SnapshotError::NotFound {
                path: Self::pseudo_path(),
            });
        };

        serde_json::from_slice(bytes).map_err(|source| SnapshotError::Parse {
            path: Self::pseudo_path(),
            source,
        })
    }

    fn save(&self, stock: &Stock) -> Result<(), SnapshotError> {
        let bytes = encode_snapshot(stock).map_err(|source| SnapshotError::Io {
            path: Self::pseudo_path(),
            source: std::io::Error::other(source),
        })?;

        *self.snapshot.write().map_err(|_| Self::poisoned())? = Some(bytes);
        Ok(())
    }
}
