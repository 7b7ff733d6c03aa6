// src/host/storage.rs
//
// Durable key-value storage. Values are JSON; every call reports failure
// through its return value and the caller decides what to do with it.

use std::{collections::HashMap, fs, io, path::PathBuf};

use serde_json::Value;

use crate::error::StorageError;

pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been set (or was removed).
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replace whatever is stored under `key`.
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Delete the key entirely. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/* ---------------- One JSON file per key ---------------- */

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key);
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { key: s!(key), source }),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Malformed { key: s!(key), source })
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io { key: s!(key), source };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let text = serde_json::to_string_pretty(value)
            .map_err(|source| StorageError::Malformed { key: s!(key), source })?;

        // Write beside, then rename over, so a crash never leaves half a record.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key: s!(key), source }),
        }
    }
}

/* ---------------- In memory ---------------- */

/// Non-durable store. `fail` makes every call error out, for exercising
/// the paths where persistence breaks but the in-memory state carries on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        if self.fail { Err(StorageError::Unavailable(s!(key))) } else { Ok(()) }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        self.check(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.check(key)?;
        self.entries.insert(s!(key), value.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
