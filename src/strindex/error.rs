use crate::nl::TranslationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrindexError {
    /// Malformed input at an API boundary (bad parameter, missing query).
    #[error("{0}")]
    Validation(String),

    /// A record with the same identity is already stored.
    #[error("String already exists")]
    Duplicate(String),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// The filter parsed, but its constraints cannot hold together.
    #[error("{0}")]
    SemanticConflict(String),

    #[error("String not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StrindexError>;
