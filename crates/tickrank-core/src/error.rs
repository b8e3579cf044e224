use thiserror::Error;

/// Validation errors surfaced to callers before any fetch starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("symbol list has {count} entries, max {max}")]
    TooManySymbols { count: usize, max: usize },

    #[error("symbols must contain at least one non-empty entry")]
    NoValidSymbols,
}
