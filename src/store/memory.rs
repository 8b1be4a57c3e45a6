//! In-memory readiness store

use super::ReadinessStore;
use crate::error::Result;
use crate::types::{ReadinessRecord, RecordKey};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Readiness store backed by a `HashMap`
///
/// Counts every lookup so callers can assert how many were issued.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<RecordKey, ReadinessRecord>,
    lookups: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under its own `(name, date)` key
    #[must_use]
    pub fn with_record(mut self, record: ReadinessRecord) -> Self {
        let key = RecordKey {
            name: record.name.clone(),
            date: record.date.clone().unwrap_or_default(),
        };
        self.items.insert(key, record);
        self
    }

    /// Store a record under an arbitrary key
    ///
    /// The record's own fields need not match the key, which mimics a store
    /// with looser key semantics.
    pub fn insert_at(&mut self, key: RecordKey, record: ReadinessRecord) {
        self.items.insert(key, record);
    }

    /// Number of lookups served so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReadinessStore for MemoryStore {
    async fn get_record(&self, key: &RecordKey) -> Result<Option<ReadinessRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.get(key).cloned())
    }
}
