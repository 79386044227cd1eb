use crate::commands::CmdResult;
use crate::error::{Result, StrindexError};
use crate::nl::translate;
use crate::store::DataStore;
use tracing::debug;

use super::list;

/// Translates a natural-language query and evaluates it against the store.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    if query.trim().is_empty() {
        return Err(StrindexError::Validation(
            "Missing 'query' parameter".to_string(),
        ));
    }

    let filter = translate(query)?;
    debug!(query = %query, ?filter, "Query translated");

    list::run(store, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterSpec;
    use crate::nl::TranslationError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn single_word_palindromes() {
        let store = StoreFixture::new()
            .with_values(&["madam", "civic", "hello", "never odd or even"])
            .store;
        let result = run(&store, "all single word palindromic strings").unwrap();

        let values: Vec<&str> = result
            .listed_records
            .iter()
            .map(|r| r.value.as_str())
            .collect();
        assert_eq!(values, vec!["madam", "civic"]);
        assert_eq!(
            result.applied_filter,
            Some(FilterSpec {
                is_palindrome: Some(true),
                word_count: Some(1),
                ..Default::default()
            })
        );
    }

    #[test]
    fn blank_query_is_a_validation_error() {
        let store = StoreFixture::new().store;
        assert!(matches!(
            run(&store, "  ").unwrap_err(),
            StrindexError::Validation(_)
        ));
    }

    #[test]
    fn unparseable_query_is_a_translation_error() {
        let store = StoreFixture::new().store;
        assert!(matches!(
            run(&store, "gibberish nonsense").unwrap_err(),
            StrindexError::Translation(TranslationError::Unparseable)
        ));
    }

    #[test]
    fn contradictory_query_is_a_semantic_conflict() {
        let store = StoreFixture::new().with_values(&["madam"]).store;
        assert!(matches!(
            run(&store, "strings longer than 10 and shorter than 3").unwrap_err(),
            StrindexError::SemanticConflict(_)
        ));
    }
}
