// src/store.rs
use std::collections::BTreeSet;

use serde_json::Value;

use crate::{error::StorageError, host::KeyValueStore};

/// What a merge did: how many candidates came in, how many were new.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    pub seen: usize,
    pub added: usize,
}

impl MergeOutcome {
    pub fn duplicates(&self) -> usize {
        self.seen - self.added
    }
}

/// Unique set of canonical profile URLs, mirrored to a single key in durable storage.
pub struct ProfileStore {
    profiles: BTreeSet<String>,
    storage: Box<dyn KeyValueStore>,
    key: String,
}

impl ProfileStore {
    /// Empty store; call [`ProfileStore::load`] to pick up the persisted record.
    pub fn new(storage: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            profiles: BTreeSet::new(),
            storage,
            key: key.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn contains(&self, profile: &str) -> bool {
        self.profiles.contains(profile)
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Replace the in-memory set with the persisted list.
    /// On error the in-memory set is left as it was.
    pub fn load(&mut self) -> Result<usize, StorageError> {
        let Some(value) = self.storage.get(&self.key)? else {
            self.profiles.clear();
            return Ok(0);
        };
        let list: Vec<String> = serde_json::from_value(value).map_err(|source| {
            StorageError::Malformed { key: self.key.clone(), source }
        })?;
        self.profiles = list.into_iter().collect();
        Ok(self.profiles.len())
    }

    /// Insert every candidate; duplicates (within the batch or already stored) are counted, not added.
    pub fn merge<I, S>(&mut self, candidates: I) -> MergeOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut outcome = MergeOutcome { seen: 0, added: 0 };
        for profile in candidates {
            outcome.seen += 1;
            if self.profiles.insert(profile.into()) {
                outcome.added += 1;
            }
        }
        outcome
    }

    /// Write the full set, replacing the prior record.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let list = Value::from(self.snapshot());
        self.storage.set(&self.key, &list)
    }

    /// Empty the set and delete the persisted key itself.
    /// The in-memory set is emptied even when the delete fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.profiles.clear();
        self.storage.remove(&self.key)
    }

    /// Members in lexicographic order.
    pub fn snapshot(&self) -> Vec<String> {
        self.profiles.iter().cloned().collect()
    }
}
