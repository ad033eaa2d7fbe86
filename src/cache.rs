//! Reference cache for foreign-key resolution.
//!
//! Values generated for a source column are kept here, keyed by
//! `(table, column)`, so that tables filled later can reference them. A key
//! only exists once some table declares a foreign key to it; values for
//! unregistered columns are never stored.
//!
//! Each key also carries a cursor used by sequential pulls. The cursor only
//! moves forward while a table is being filled and is rewound with
//! [`ReferenceCache::reset_cursors`] between tables; accumulated values are
//! never removed.

use fill_core::ColumnRef;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Error type for cache reads.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CacheError {
    /// No table declared a foreign key to this column
    #[error("Cache has no key for {0}")]
    UnregisteredKey(ColumnRef),

    /// The key exists but nothing was generated for it yet
    #[error("Cache has no values for {0}; is its table listed before the tables referencing it?")]
    EmptyKey(ColumnRef),

    /// A sequential pull ran past the last cached value
    #[error("Cache values for {key} exhausted after {len} sequential pulls")]
    Exhausted { key: ColumnRef, len: usize },
}

#[derive(Debug, Default)]
struct CacheEntry {
    values: Vec<String>,
    cursor: usize,
}

/// Concurrency-safe store of generated source values.
///
/// All state sits behind one mutex; critical sections are a map lookup and a
/// push or index, which is cheap next to generating a row.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    entries: Mutex<HashMap<ColumnRef, CacheEntry>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<ColumnRef, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ensure `key` exists. Registering twice keeps the existing values.
    pub fn register(&self, key: &ColumnRef) {
        self.entries().entry(key.clone()).or_default();
    }

    /// Whether `key` has been registered, with or without values.
    pub fn exists(&self, key: &ColumnRef) -> bool {
        self.entries().contains_key(key)
    }

    /// Append `value` to `key`. Returns `false` (and stores nothing) when
    /// the key is not registered.
    pub fn append(&self, key: &ColumnRef, value: String) -> bool {
        match self.entries().get_mut(key) {
            Some(entry) => {
                entry.values.push(value);
                true
            }
            None => false,
        }
    }

    /// Return the value under the cursor of `key` and advance the cursor.
    pub fn pull_sequential(&self, key: &ColumnRef) -> Result<String, CacheError> {
        let mut entries = self.entries();
        let entry = Self::populated_entry(&mut entries, key)?;

        let value = entry
            .values
            .get(entry.cursor)
            .cloned()
            .ok_or_else(|| CacheError::Exhausted {
                key: key.clone(),
                len: entry.values.len(),
            })?;
        entry.cursor += 1;
        Ok(value)
    }

    /// Return a value of `key` chosen uniformly over everything cached so far.
    pub fn sample_random(&self, key: &ColumnRef) -> Result<String, CacheError> {
        let mut entries = self.entries();
        let entry = Self::populated_entry(&mut entries, key)?;

        let index = rand::rng().random_range(0..entry.values.len());
        Ok(entry.values[index].clone())
    }

    fn populated_entry<'a>(
        entries: &'a mut HashMap<ColumnRef, CacheEntry>,
        key: &ColumnRef,
    ) -> Result<&'a mut CacheEntry, CacheError> {
        let entry = entries
            .get_mut(key)
            .ok_or_else(|| CacheError::UnregisteredKey(key.clone()))?;
        if entry.values.is_empty() {
            return Err(CacheError::EmptyKey(key.clone()));
        }
        Ok(entry)
    }

    /// Rewind every cursor to the first value. Values are kept.
    pub fn reset_cursors(&self) {
        for entry in self.entries().values_mut() {
            entry.cursor = 0;
        }
    }

    /// Number of values cached for `key`, if registered.
    pub fn len(&self, key: &ColumnRef) -> Option<usize> {
        self.entries().get(key).map(|entry| entry.values.len())
    }

    /// Copy of the values cached for `key`, in append order.
    pub fn values(&self, key: &ColumnRef) -> Option<Vec<String>> {
        self.entries().get(key).map(|entry| entry.values.clone())
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<ColumnRef> {
        let mut keys: Vec<ColumnRef> = self.entries().keys().cloned().collect();
        keys.sort();
        keys
    }
}
