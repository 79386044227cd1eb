//! Natural-language query translation.
//!
//! [`translate`] turns a free-text query such as
//! `"all single word palindromic strings longer than 5"` into a [`FilterSpec`].
//! It is a small set of independent patterns, not a parser: every pattern is
//! tried against the whole (lower-cased, trimmed) query, and several can fire
//! at once. When two patterns set the same field, the one applied later wins.
//! Patterns are applied in this order:
//!
//! | # | Pattern                                   | Effect                           |
//! |---|-------------------------------------------|----------------------------------|
//! | 1 | `palindrom...`                            | `is_palindrome = true`           |
//! | 2 | `single word`, `one word`, `1 word`       | `word_count = 1`                 |
//! | 3 | `N word(s)`                               | `word_count = N`                 |
//! | 4 | `longer than N`                           | `min_length = N + 1`             |
//! | 5 | `at least N`                              | `min_length = N`                 |
//! | 6 | `shorter than N`                          | `max_length = N - 1`             |
//! | 7 | `exactly N`, `with length N`              | `min_length = max_length = N`    |
//! | 8 | `first vowel`                             | `contains_character = 'a'`       |
//! | 9 | `contain[s|ing] [the] letter X`           | `contains_character = X`         |
//!
//! The first-vowel idiom is a fixed stand-in for `'a'`; it is applied before
//! the explicit letter so a named letter always takes precedence.
//!
//! The translator does not check `min_length <= max_length`. Callers must run
//! [`FilterSpec::validate`] (or [`FilterSpec::evaluate`], which does) before
//! using the result.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::filter::FilterSpec;

static PALINDROME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bpalindrom").unwrap());
static SINGLE_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:single|one|1)\s+word\b").unwrap());
static WORD_COUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([0-9]+)\s+words?\b").unwrap());
static LONGER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blonger\s+than\s+([0-9]+)").unwrap());
static AT_LEAST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bat\s+least\s+([0-9]+)").unwrap());
static SHORTER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bshorter\s+than\s+([0-9]+)").unwrap());
static EXACT_LENGTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:exactly|with\s+length)\s+([0-9]+)").unwrap());
static FIRST_VOWEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfirst\s+vowel\b").unwrap());
// Captures the whole alphanumeric token so "letter xy" is rejected rather than read as 'x'
static CONTAINS_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bcontain(?:s|ing)?\s+(?:the\s+)?letter\s+([^\W_]+)").unwrap());

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationError {
    #[error("unable to parse query")]
    Unparseable,

    #[error("invalid word count")]
    InvalidWordCount,

    #[error("invalid character filter")]
    InvalidCharacter,

    #[error("invalid length filter")]
    InvalidLength,
}

type Length = Result<usize, TranslationError>;

/// Raw pattern hits, validated only once every pattern has had its turn.
#[derive(Debug, Default)]
struct Draft<'q> {
    matched: bool,
    is_palindrome: Option<bool>,
    word_count: Option<&'q str>,
    min_length: Option<Length>,
    max_length: Option<Length>,
    contains_character: Option<&'q str>,
}

pub fn translate(query: &str) -> Result<FilterSpec, TranslationError> {
    let normalized = query.to_lowercase();
    let q = normalized.trim();
    let mut draft = Draft::default();

    if PALINDROME_RE.is_match(q) {
        draft.matched = true;
        draft.is_palindrome = Some(true);
    }

    if SINGLE_WORD_RE.is_match(q) {
        draft.matched = true;
        draft.word_count = Some("1");
    }

    if let Some(n) = capture(&WORD_COUNT_RE, q) {
        draft.matched = true;
        draft.word_count = Some(n);
    }

    if let Some(n) = capture(&LONGER_THAN_RE, q) {
        draft.matched = true;
        draft.min_length = Some(length(n, |n| n.checked_add(1)));
    }

    if let Some(n) = capture(&AT_LEAST_RE, q) {
        draft.matched = true;
        draft.min_length = Some(length(n, Some));
    }

    if let Some(n) = capture(&SHORTER_THAN_RE, q) {
        draft.matched = true;
        draft.max_length = Some(length(n, |n| n.checked_sub(1)));
    }

    if let Some(n) = capture(&EXACT_LENGTH_RE, q) {
        draft.matched = true;
        draft.min_length = Some(length(n, Some));
        draft.max_length = Some(length(n, Some));
    }

    if FIRST_VOWEL_RE.is_match(q) {
        draft.matched = true;
        draft.contains_character = Some("a");
    }

    if let Some(token) = capture(&CONTAINS_LETTER_RE, q) {
        draft.matched = true;
        draft.contains_character = Some(token);
    }

    draft.finish()
}

impl Draft<'_> {
    fn finish(self) -> Result<FilterSpec, TranslationError> {
        if !self.matched {
            return Err(TranslationError::Unparseable);
        }

        let word_count = self
            .word_count
            .map(|digits| {
                digits
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or(TranslationError::InvalidWordCount)
            })
            .transpose()?;

        let contains_character = self
            .contains_character
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(TranslationError::InvalidCharacter),
                }
            })
            .transpose()?;

        Ok(FilterSpec {
            is_palindrome: self.is_palindrome,
            min_length: self.min_length.transpose()?,
            max_length: self.max_length.transpose()?,
            word_count,
            contains_character,
        })
    }
}

fn capture<'q>(re: &Regex, q: &'q str) -> Option<&'q str> {
    re.captures(q)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn length(digits: &str, adjust: impl Fn(usize) -> Option<usize>) -> Length {
    digits
        .parse::<usize>()
        .ok()
        .and_then(adjust)
        .ok_or(TranslationError::InvalidLength)
}
