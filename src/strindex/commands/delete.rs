use crate::analyze::content_hash;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

use super::get::not_found_as_value;

pub fn run<S: DataStore>(store: &mut S, value: &str) -> Result<CmdResult> {
    let record = store
        .remove(&content_hash(value))
        .map_err(|e| not_found_as_value(e, value))?;

    info!(id = %record.id, "String deleted");

    Ok(CmdResult::default().with_affected_records(vec![record]))
}
