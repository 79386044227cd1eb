use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analyze::analyze;

/// Properties derived from the stripped form of a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    // Keeps first-seen order when serialized
    pub character_frequency_map: IndexMap<char, usize>,
}

/// A stored string together with everything computed from it.
///
/// `id` is always `properties.sha256_hash`; records are never updated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl AnalyzedRecord {
    pub fn new(value: String) -> Self {
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
