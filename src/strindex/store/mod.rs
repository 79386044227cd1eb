//! # Storage Layer
//!
//! Records live behind the [`DataStore`] trait so the command layer never
//! depends on a particular backend. [`memory::InMemoryStore`] is the only
//! implementation; nothing is persisted across runs.
//!
//! ## Identity
//!
//! Every record is keyed by its `id`, the content hash of its stripped value.
//! [`DataStore::insert`] is insert-if-absent: it fails with
//! [`StrindexError::Duplicate`](crate::error::StrindexError::Duplicate) when the
//! id is already present and never replaces the stored record. Callers that
//! share a store between threads must hold exclusive access for the duration
//! of the call, which makes the duplicate check and the write one step.
//!
//! ## Ordering
//!
//! [`DataStore::list`] returns records in insertion order.

use crate::error::Result;
use crate::model::AnalyzedRecord;

pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Store a new record, rejecting it if its id already exists
    fn insert(&mut self, record: AnalyzedRecord) -> Result<()>;

    /// Get a record by id
    fn get(&self, id: &str) -> Result<AnalyzedRecord>;

    /// List all records in insertion order
    fn list(&self) -> Result<Vec<AnalyzedRecord>>;

    /// Remove a record, returning it
    fn remove(&mut self, id: &str) -> Result<AnalyzedRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
