use crate::filter::FilterSpec;
use crate::model::AnalyzedRecord;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod query;

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or removed by the command
    pub affected_records: Vec<AnalyzedRecord>,
    /// Records returned by a lookup or a filter
    pub listed_records: Vec<AnalyzedRecord>,
    /// The specification a filter command evaluated
    pub applied_filter: Option<FilterSpec>,
}

impl CmdResult {
    pub fn with_affected_records(mut self, records: Vec<AnalyzedRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<AnalyzedRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_applied_filter(mut self, filter: FilterSpec) -> Self {
        self.applied_filter = Some(filter);
        self
    }
}
