//! Persistent JSON state store
//!
//! A [`StateStore`] owns one JSON-object file and rewrites the whole file
//! atomically on every mutation, so external readers (UI, inspection
//! tooling) observe either the previous complete file or the new complete
//! file, never a torn write. Unreadable previous content is treated as
//! fresh state: the store is a best-effort cache, and availability wins
//! over surfacing transient corruption.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

/// Single-file JSON key-value store with atomic whole-file rewrites.
///
/// Callers owning an instance are responsible for serializing concurrent
/// access; two instances must not share one path without external mutual
/// exclusion.
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    object: Map<String, Value>,
}

impl StateStore {
    /// Open the store backed by `path` and write the current object back.
    ///
    /// A missing, unreadable, or non-object file starts the store from an
    /// empty object; that is not an error. The parent directory is created
    /// when absent.
    ///
    /// # Errors
    ///
    /// Only the initial write-back can fail.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let object = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(object)) => object,
                Ok(_) => {
                    debug!(
                        "State file {} holds non-object JSON, starting empty",
                        path.display()
                    );
                    Map::new()
                }
                Err(error) => {
                    debug!(
                        "State file {} is not valid JSON ({}), starting empty",
                        path.display(),
                        error
                    );
                    Map::new()
                }
            },
            Err(error) => {
                debug!(
                    "State file {} is unreadable ({}), starting empty",
                    path.display(),
                    error
                );
                Map::new()
            }
        };

        let store = Self { path, object };
        store.save()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a value.
    ///
    /// Absent keys return `None`; an explicitly stored null returns
    /// `Some(&Value::Null)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    /// Insert, overwrite, or remove (`None`) a key, then durably rewrite the
    /// whole file.
    ///
    /// Every call is independently atomic; removal of an absent key still
    /// rewrites the file.
    ///
    /// # Errors
    ///
    /// Write failures propagate. The in-memory object keeps the merged
    /// content, so retrying any `set` re-attempts the full write.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Option<Value>>) -> Result<()> {
        let key = key.into();
        match value.into() {
            Some(value) => {
                self.object.insert(key, value);
            }
            None => {
                self.object.remove(&key);
            }
        }
        self.save()
    }

    /// Atomically replace the backing file with the serialized object.
    ///
    /// Write-temp-then-rename; the temporary file lives in the target's
    /// directory so the rename never crosses filesystems, and its Drop impl
    /// removes it on every failure path.
    fn save(&self) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).with_context(|| {
            format!("Failed to create state directory: {}", parent.display())
        })?;

        let json =
            serde_json::to_string_pretty(&self.object).context("Failed to serialize state")?;

        let mut temp = NamedTempFile::new_in(&parent).with_context(|| {
            format!("Failed to create temporary state file in {}", parent.display())
        })?;
        temp.write_all(json.as_bytes())
            .context("Failed to write state to temporary file")?;
        temp.flush().context("Failed to flush state to temporary file")?;
        temp.as_file()
            .sync_all()
            .context("Failed to sync state to disk")?;
        temp.persist(&self.path).with_context(|| {
            format!("Failed to replace state file: {}", self.path.display())
        })?;

        trace!("State written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_set_creates_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = StateStore::open(&path).unwrap();

        store.set("key1", json!(123)).unwrap();
        assert_eq!(read_json(&path), json!({"key1": 123}));

        store.set("key1", json!(345)).unwrap();
        assert_eq!(read_json(&path), json!({"key1": 345}));

        store.set("key2", json!("value123")).unwrap();
        assert_eq!(read_json(&path), json!({"key1": 345, "key2": "value123"}));
    }

    #[test]
    fn test_reopen_preserves_existing_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let mut store = StateStore::open(&path).unwrap();
            store.set("key1", json!(345)).unwrap();
            store.set("key2", json!("value123")).unwrap();
        }

        let mut store = StateStore::open(&path).unwrap();
        assert_eq!(store.get("key1"), Some(&json!(345)));

        store.set("key2", json!("value345")).unwrap();
        assert_eq!(read_json(&path), json!({"key1": 345, "key2": "value345"}));
    }

    #[test]
    fn test_invalid_json_is_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[").unwrap();

        let mut store = StateStore::open(&path).unwrap();
        store.set("key1", json!(123)).unwrap();
        assert_eq!(read_json(&path), json!({"key1": 123}));
    }

    #[test]
    fn test_non_object_json_is_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1,2,3]").unwrap();

        let store = StateStore::open(&path).unwrap();
        assert_eq!(store.get("0"), None);
        assert_eq!(read_json(&path), json!({}));
    }

    #[test]
    fn test_missing_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = StateStore::open(&path).unwrap();
        assert_eq!(read_json(&path), json!({}));

        // Removing an absent key is a no-op
        store.set("key1", None).unwrap();
        assert_eq!(read_json(&path), json!({}));

        store.set("key1", json!(123)).unwrap();
        assert_eq!(read_json(&path), json!({"key1": 123}));

        store.set("key1", None).unwrap();
        assert_eq!(read_json(&path), json!({}));
    }

    #[test]
    fn test_explicit_null_is_distinct_from_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = StateStore::open(&path).unwrap();

        store.set("key1", Some(Value::Null)).unwrap();
        assert_eq!(read_json(&path), json!({"key1": null}));
        assert_eq!(store.get("key1"), Some(&Value::Null));

        store.set("key1", None).unwrap();
        assert_eq!(read_json(&path), json!({}));
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_nested_values_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = StateStore::open(&path).unwrap();

        let value = json!({"nested": {"list": [1, 2, 3], "flag": true}});
        store.set("key1", value.clone()).unwrap();

        let store = StateStore::open(&path).unwrap();
        assert_eq!(store.get("key1"), Some(&value));
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deep").join("state.json");

        let store = StateStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(read_json(&path), json!({}));
    }
}
