//! Infrastructure layer: snapshot persistence for the stock mapping.

pub mod snapshot;

pub use snapshot::{
    DEFAULT_SNAPSHOT_PATH, JsonSnapshotStore, MemorySnapshotStore, SnapshotError, SnapshotStore,
    load_or_empty,
};
