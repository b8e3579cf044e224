use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::domain::{Symbol, ValuationMetrics};

/// Classification of a failed provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure, timeout, or a non-success status.
    Unavailable,
    /// The provider answered with a body this service cannot read.
    InvalidResponse,
}

/// Error returned by a metrics source for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidResponse,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SourceError {}

/// Per-symbol valuation source.
///
/// Implementations must be `Send + Sync`; the batch fetcher shares a
/// single source across all of a request's tasks.
pub trait MetricsSource: Send + Sync {
    /// Short provider label used in log events.
    fn name(&self) -> &'static str;

    /// Fetch valuation ratios for one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the provider cannot be reached,
    /// answers with a non-success status, or returns an unreadable
    /// body. The batch fetcher folds the error into a failure row;
    /// it never aborts sibling fetches.
    fn metrics<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<ValuationMetrics, SourceError>> + Send + 'a>>;
}
