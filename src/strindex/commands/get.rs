use crate::analyze::content_hash;
use crate::commands::CmdResult;
use crate::error::{Result, StrindexError};
use crate::store::DataStore;

/// Looks a record up by value. The value is reduced to its identity first, so
/// any value with the same stripped form finds the record.
pub fn run<S: DataStore>(store: &S, value: &str) -> Result<CmdResult> {
    let record = store
        .get(&content_hash(value))
        .map_err(|e| not_found_as_value(e, value))?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}

pub(crate) fn not_found_as_value(err: StrindexError, value: &str) -> StrindexError {
    match err {
        StrindexError::NotFound(_) => StrindexError::NotFound(value.to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_stored_value() {
        let store = StoreFixture::new().with_values(&["madam", "hello"]).store;
        let result = run(&store, "hello").unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].value, "hello");
    }

    #[test]
    fn reports_missing_value() {
        let store = StoreFixture::new().with_values(&["madam"]).store;
        match run(&store, "absent") {
            Err(StrindexError::NotFound(v)) => assert_eq!(v, "absent"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
