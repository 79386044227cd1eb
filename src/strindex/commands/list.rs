use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &S, filter: FilterSpec) -> Result<CmdResult> {
    // Conflicts are rejected before the store is read
    filter.validate()?;
    let matched = filter.evaluate(store.list()?)?;

    debug!(?filter, count = matched.len(), "Filter evaluated");

    Ok(CmdResult::default()
        .with_listed_records(matched)
        .with_applied_filter(filter))
}
