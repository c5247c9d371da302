//! File-backed snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockroom_inventory::Stock;

use super::{SnapshotError, SnapshotStore, encode_snapshot};

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "inventory.json";

/// Snapshot store backed by a single JSON file.
///
/// Each save rewrites the whole file in place. There is no partial-write
/// protection, so a crash mid-save can leave a corrupt file behind; loads
/// of such a file surface [`SnapshotError::Parse`].
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonSnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_PATH)
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Stock, SnapshotError> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                SnapshotError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                SnapshotError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let stock = serde_json::from_str(&text).map_err(|source| SnapshotError::Parse {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("loaded snapshot from {}", self.path.display());
        Ok(stock)
    }

    fn save(&self, stock: &Stock) -> Result<(), SnapshotError> {
        let buf = encode_snapshot(stock).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source: std::io::Error::other(source),
        })?;

        fs::write(&self.path, buf).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("saved snapshot to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stock() -> Stock {
        let mut stock = Stock::new();
        stock.add("apple", 7).unwrap();
        stock.add("pear", 3).unwrap();
        stock
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("inventory.json"));
        let stock = sample_stock();

        store.save(&stock).unwrap();

        assert_eq!(store.load().unwrap(), stock);
    }

    #[test]
    fn save_writes_four_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        JsonSnapshotStore::new(&path).save(&sample_stock()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"apple\": 7,\n    \"pear\": 3\n}\n");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let store = JsonSnapshotStore::new(&path);

        let err = store.load().unwrap_err();

        assert!(matches!(err, SnapshotError::NotFound { path: p } if p == path));
    }

    #[test]
    fn load_malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let err = JsonSnapshotStore::new(&path).load().unwrap_err();

        assert!(matches!(err, SnapshotError::Parse { .. }));
    }

    #[test]
    fn load_rejects_well_formed_but_wrong_shaped_json() {
        let dir = tempfile::tempdir().unwrap();
        for contents in ["[1, 2, 3]", "{\"apple\": \"ten\"}", "{\"\": 5}", "{\"apple\": 7.5}"] {
            let path = dir.path().join("inventory.json");
            fs::write(&path, contents).unwrap();

            let err = JsonSnapshotStore::new(&path).load().unwrap_err();

            assert!(matches!(err, SnapshotError::Parse { .. }), "accepted {contents}");
        }
    }

    #[test]
    fn save_into_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("no-such-dir").join("inventory.json"));

        let err = store.save(&sample_stock()).unwrap_err();

        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn empty_stock_round_trips_as_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let store = JsonSnapshotStore::new(&path);

        store.save(&Stock::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
        assert!(store.load().unwrap().is_empty());
    }
}
