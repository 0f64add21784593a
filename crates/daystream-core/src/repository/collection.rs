//! Persisted Entity Collection
//!
//! An ordered `Vec` of entities mirrored to one storage key. Every
//! successful mutation rewrites the whole collection; write failures are
//! logged and the in-memory state is kept.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage::Storage;
use crate::domain::{DomainError, DomainResult, Entity};

pub struct EntityCollection<T> {
    key: &'static str,
    storage: Arc<dyn Storage>,
    entries: Vec<T>,
}

impl<T> EntityCollection<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// Load the collection stored under `key`.
    ///
    /// A key that was never written starts from `seed()` (and is written
    /// immediately). Stored data that does not parse is an error: user
    /// data is never silently discarded.
    pub fn load(
        storage: Arc<dyn Storage>,
        key: &'static str,
        seed: impl FnOnce() -> Vec<T>,
    ) -> DomainResult<Self> {
        let (entries, seeded) = match storage.load(key)? {
            Some(raw) => {
                let entries: Vec<T> = serde_json::from_str(&raw)
                    .map_err(|e| DomainError::Corrupt(format!("{}: {}", key, e)))?;
                (entries, false)
            }
            None => (seed(), true),
        };

        let collection = Self { key, storage, entries };
        if seeded {
            log::info!("[{}] no stored data, starting with {} entries", key, collection.entries.len());
            collection.persist();
        } else {
            log::info!("[{}] loaded {} entries", key, collection.entries.len());
        }
        Ok(collection)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Insert entities at the front, keeping their relative order
    pub fn prepend(&mut self, new_entries: Vec<T>) {
        if new_entries.is_empty() {
            return;
        }
        self.entries.splice(0..0, new_entries);
        self.persist();
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
        self.persist();
    }

    /// Replace the entity with the same id; `false` if absent
    pub fn replace(&mut self, entry: T) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == entry.id()) {
            Some(slot) => {
                *slot = entry;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Mutate the entity with `id` in place, returning the new value
    pub fn update_with(&mut self, id: &str, f: impl FnOnce(&mut T)) -> Option<T> {
        let slot = self.entries.iter_mut().find(|e| e.id() == id)?;
        f(slot);
        let updated = slot.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the entity with `id`; `false` if absent
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Rewrite the full collection to storage
    pub fn persist(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(|e| DomainError::Internal(e.to_string()))
            .and_then(|json| self.storage.save(self.key, &json));
        if let Err(e) = result {
            log::error!("[{}] failed to persist {} entries: {}", self.key, self.entries.len(), e);
        }
    }
}
