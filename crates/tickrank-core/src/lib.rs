//! # tickrank Core
//!
//! Domain types and fetch/rank machinery for the tickrank valuation
//! ranking service.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Finnhub) |
//! | [`domain`] | Domain models (Symbol, ValuationRecord, SortSpec) |
//! | [`error`] | Validation error types |
//! | [`fetch`] | Bounded-concurrency batch fetcher |
//! | [`http`] | HTTP transport abstraction |
//! | [`ranker`] | Stable multi-key sort over valuation rows |
//! | [`request`] | Raw symbol-list normalization |
//! | [`source`] | Metrics source trait and source errors |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickrank_core::{
//!     rank, BatchFetcher, FinnhubAdapter, ReqwestHttpClient, SortSpec, Symbol,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let http = Arc::new(ReqwestHttpClient::new());
//!     let source = Arc::new(FinnhubAdapter::new(http, "my-token"));
//!     let fetcher = BatchFetcher::new(source);
//!
//!     let symbols = vec![Symbol::parse("AAPL").unwrap()];
//!     let rows = rank(fetcher.run(&symbols).await, &SortSpec::default());
//!     println!("{rows:?}");
//! }
//! ```
//!
//! ## Error Handling
//!
//! Request validation fails fast with [`ValidationError`] before any
//! network activity. Per-symbol provider failures are folded into
//! failure-tagged rows by the fetcher and never surface as errors; a
//! batch always yields one row per input symbol.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod http;
pub mod ranker;
pub mod request;
pub mod source;

// Re-export commonly used types at crate root for convenience

pub use adapters::FinnhubAdapter;

pub use domain::{
    SortDirection, SortKey, SortSpec, Symbol, ValuationMetrics, ValuationRecord, FAILED_TO_FETCH,
};

pub use error::ValidationError;

pub use fetch::{BatchFetcher, MAX_IN_FLIGHT};

pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use ranker::rank;

pub use request::{normalize_symbols, MAX_SYMBOLS};

pub use source::{MetricsSource, SourceError, SourceErrorKind};
