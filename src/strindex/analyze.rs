//! Property analysis.
//!
//! Everything here works on the value with leading and trailing whitespace
//! removed, so `"madam "` and `"madam"` share the same properties and the same
//! identity.

use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::model::StringProperties;

pub fn analyze(value: &str) -> StringProperties {
    let stripped = value.trim();

    StringProperties {
        length: stripped.chars().count(),
        is_palindrome: is_palindrome(stripped),
        unique_characters: stripped.chars().collect::<HashSet<_>>().len(),
        word_count: stripped.split_whitespace().count(),
        sha256_hash: content_hash(stripped),
        character_frequency_map: character_frequency(stripped),
    }
}

/// Identity of a value: hex SHA-256 of its stripped UTF-8 bytes.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.trim().as_bytes());
    hex::encode(hasher.finalize())
}

fn is_palindrome(stripped: &str) -> bool {
    let reversed: String = stripped.chars().rev().collect();
    stripped.to_lowercase() == reversed.to_lowercase()
}

fn character_frequency(stripped: &str) -> IndexMap<char, usize> {
    let mut freq = IndexMap::new();
    for c in stripped.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}
