//! services/api/src/adapters/file_store.rs
//!
//! A `KeyValueStore` kept in a single JSON file, standing in for browser
//! local storage when the core runs from the command line.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;
use word_of_the_day_core::ports::{KeyValueStore, PortError, PortResult};

pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

fn io_error(e: impl std::fmt::Display) -> PortError {
    PortError::Unexpected(e.to_string())
}

/// Serialises `values` to `out` and flushes, so a short write is an error
/// rather than a truncated file.
fn write_values(out: impl Write, values: &BTreeMap<String, String>) -> PortResult<()> {
    let mut writer = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut writer, values).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> PortResult<Self> {
        let path = path.into();
        let values = match File::open(&path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file)).map_err(io_error)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No client store yet, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(io_error(e)),
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole map through a temp file in the same directory, so a
    /// crash never leaves a half-written store behind.
    fn persist(&self, values: &BTreeMap<String, String>) -> PortResult<()> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(io_error)?;

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_error)?;
        write_values(&temp_file, values)?;
        temp_file.persist(&self.path).map_err(io_error)?;
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> PortResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| PortError::Unexpected("client store lock poisoned".to_string()))?;
        let mut next = values.clone();
        change(&mut next);
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| PortError::Unexpected("client store lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> PortResult<()> {
        self.update(|values| {
            values.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        store.set("gone", "soon").unwrap();
        store.remove("gone").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(reopened.get("gone").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }

    /// Accepts nothing: every write fails.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::Other, "no space left on device"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn buffered_write_failure_is_reported() {
        // Small enough to sit in the buffer until the final flush.
        let values = BTreeMap::from([("k".to_string(), "v".to_string())]);
        assert!(write_values(FullDisk, &values).is_err());
    }

    #[test]
    fn large_values_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");
        let big = "x".repeat(64 * 1024);

        let store = JsonFileStore::open(&path).unwrap();
        for n in 0..20 {
            store.set(&format!("key-{n}"), &big).unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("key-19").unwrap().as_deref(), Some(big.as_str()));
    }
}
