use super::DataStore;
use crate::error::{Result, StrindexError};
use crate::model::AnalyzedRecord;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// In-memory storage.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    // Insertion sequence -> record, so listing keeps insertion order
    records: BTreeMap<u64, AnalyzedRecord>,
    ids: HashMap<String, u64>,
    next_seq: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, record: AnalyzedRecord) -> Result<()> {
        match self.ids.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(StrindexError::Duplicate(record.id)),
            Entry::Vacant(slot) => {
                let seq = self.next_seq;
                self.next_seq += 1;
                slot.insert(seq);
                self.records.insert(seq, record);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Result<AnalyzedRecord> {
        self.ids
            .get(id)
            .and_then(|seq| self.records.get(seq))
            .cloned()
            .ok_or_else(|| StrindexError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<AnalyzedRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn remove(&mut self, id: &str) -> Result<AnalyzedRecord> {
        self.ids
            .remove(id)
            .and_then(|seq| self.records.remove(&seq))
            .ok_or_else(|| StrindexError::NotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_values(mut self, values: &[&str]) -> Self {
            for value in values {
                self.store
                    .insert(AnalyzedRecord::new(value.to_string()))
                    .unwrap();
            }
            self
        }
    }
}
