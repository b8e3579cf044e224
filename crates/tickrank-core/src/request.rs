//! Raw symbol-list normalization applied before any fetch starts.

use crate::domain::Symbol;
use crate::error::ValidationError;

/// Hard cap on raw symbols per rank request.
pub const MAX_SYMBOLS: usize = 15;

/// Normalize a raw symbol list into fetchable symbols.
///
/// The raw list is rejected outright when it exceeds [`MAX_SYMBOLS`].
/// Blank entries are dropped rather than rejected, and duplicates
/// survive normalization; at least one symbol must remain.
///
/// # Errors
///
/// Returns [`ValidationError::TooManySymbols`] or
/// [`ValidationError::NoValidSymbols`].
pub fn normalize_symbols(raw: &[String]) -> Result<Vec<Symbol>, ValidationError> {
    if raw.len() > MAX_SYMBOLS {
        return Err(ValidationError::TooManySymbols {
            count: raw.len(),
            max: MAX_SYMBOLS,
        });
    }

    let symbols: Vec<Symbol> = raw
        .iter()
        .filter_map(|entry| Symbol::parse(entry).ok())
        .collect();

    if symbols.is_empty() {
        return Err(ValidationError::NoValidSymbols);
    }

    Ok(symbols)
}
