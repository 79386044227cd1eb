use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::AnalyzedRecord;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, value: String) -> Result<CmdResult> {
    let record = AnalyzedRecord::new(value);
    store.insert(record.clone())?;

    info!(id = %record.id, length = record.properties.length, "String stored");

    Ok(CmdResult::default().with_affected_records(vec![record]))
}
