//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client (the HTTP server, the CLI, tests).
//!
//! It dispatches to `commands/*.rs` and returns structured
//! `Result<CmdResult>` values. It holds no business logic and does no I/O.
//!
//! `StrindexApi<S: DataStore>` is generic over the storage backend so the
//! same facade runs against any [`DataStore`].

use crate::commands;
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::store::DataStore;

/// The main API facade for strindex operations.
pub struct StrindexApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> StrindexApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_string(&mut self, value: String) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, value)
    }

    pub fn get_string(&self, value: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, value)
    }

    pub fn delete_string(&mut self, value: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, value)
    }

    pub fn filter_strings(&self, filter: FilterSpec) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn query_strings(&self, query: &str) -> Result<commands::CmdResult> {
        commands::query::run(&self.store, query)
    }

    pub fn record_count(&self) -> usize {
        self.store.len()
    }
}

pub use commands::CmdResult;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrindexError;
    use crate::store::memory::InMemoryStore;

    fn api() -> StrindexApi<InMemoryStore> {
        StrindexApi::new(InMemoryStore::new())
    }

    #[test]
    fn create_then_get_and_delete() {
        let mut api = api();
        api.create_string("madam".into()).unwrap();
        assert_eq!(api.record_count(), 1);

        let got = api.get_string("madam").unwrap();
        assert_eq!(got.listed_records[0].value, "madam");

        let deleted = api.delete_string("madam").unwrap();
        assert_eq!(deleted.affected_records[0].value, "madam");
        assert_eq!(api.record_count(), 0);
    }

    #[test]
    fn filter_and_query_dispatch() {
        let mut api = api();
        api.create_string("level".into()).unwrap();
        api.create_string("two words".into()).unwrap();

        let filtered = api
            .filter_strings(FilterSpec {
                word_count: Some(2),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(filtered.listed_records[0].value, "two words");

        let queried = api.query_strings("palindromes").unwrap();
        assert_eq!(queried.listed_records[0].value, "level");
    }

    #[test]
    fn errors_pass_through() {
        let mut api = api();
        api.create_string("x".into()).unwrap();
        assert!(matches!(
            api.create_string("x".into()).unwrap_err(),
            StrindexError::Duplicate(_)
        ));
        assert!(matches!(
            api.get_string("y").unwrap_err(),
            StrindexError::NotFound(_)
        ));
    }
}
