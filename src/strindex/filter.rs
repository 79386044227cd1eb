//! Filter specifications.
//!
//! A [`FilterSpec`] is the canonical form of every query against the store,
//! whether it came from structured parameters ([`FilterParams`]) or from the
//! natural-language translator. Each present field is one constraint; a record
//! matches when it satisfies all of them.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrindexError};
use crate::model::AnalyzedRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// Rejects specifications whose constraints contradict each other.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(StrindexError::SemanticConflict(
                    "conflicting length filters".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        let props = &record.properties;

        if let Some(want) = self.is_palindrome {
            if props.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            // Searched in the raw value, not the stripped one
            let needle: String = c.to_lowercase().collect();
            if !record.value.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Validates, then returns the matching records in their original order.
    pub fn evaluate(&self, records: Vec<AnalyzedRecord>) -> Result<Vec<AnalyzedRecord>> {
        self.validate()?;
        Ok(records.into_iter().filter(|r| self.matches(r)).collect())
    }
}

/// Structured filter parameters as they arrive from a client, unparsed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl TryFrom<FilterParams> for FilterSpec {
    type Error = StrindexError;

    fn try_from(params: FilterParams) -> Result<Self> {
        let is_palindrome = match params.is_palindrome.as_deref().map(str::trim) {
            None => None,
            Some(v) if v.eq_ignore_ascii_case("true") => Some(true),
            Some(v) if v.eq_ignore_ascii_case("false") => Some(false),
            Some(v) => {
                return Err(StrindexError::Validation(format!(
                    "is_palindrome must be true or false, got '{}'",
                    v
                )))
            }
        };

        let word_count = parse_count("word_count", params.word_count.as_deref())?;
        if word_count == Some(0) {
            return Err(StrindexError::Validation("invalid word count".to_string()));
        }

        // Not trimmed: whitespace is a valid character to search for
        let contains_character = match params.contains_character.as_deref() {
            None => None,
            Some(v) => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(StrindexError::Validation(
                            "invalid character filter".to_string(),
                        ))
                    }
                }
            }
        };

        Ok(FilterSpec {
            is_palindrome,
            min_length: parse_count("min_length", params.min_length.as_deref())?,
            max_length: parse_count("max_length", params.max_length.as_deref())?,
            word_count,
            contains_character,
        })
    }
}

fn parse_count(name: &str, raw: Option<&str>) -> Result<Option<usize>> {
    raw.map(|v| {
        v.trim().parse::<usize>().map_err(|_| {
            StrindexError::Validation(format!(
                "{} must be a non-negative integer, got '{}'",
                name, v
            ))
        })
    })
    .transpose()
}
