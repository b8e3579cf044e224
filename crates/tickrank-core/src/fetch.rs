//! Bounded-concurrency batch fetch over a metrics source.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::domain::{Symbol, ValuationRecord};
use crate::source::MetricsSource;

/// Cap on simultaneous provider calls within one batch. Fixed
/// policy, not derived from batch size.
pub const MAX_IN_FLIGHT: usize = 5;

/// Fans a symbol batch out to the metrics source and folds every
/// outcome back into one row per symbol, in input order.
pub struct BatchFetcher {
    source: Arc<dyn MetricsSource>,
    limit: usize,
}

impl BatchFetcher {
    pub fn new(source: Arc<dyn MetricsSource>) -> Self {
        Self {
            source,
            limit: MAX_IN_FLIGHT,
        }
    }

    /// Override the admission cap; zero is clamped to one.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Fetch metrics for every symbol in the batch.
    ///
    /// Returns exactly one row per input symbol, in input order,
    /// regardless of completion order. A failed or panicked fetch
    /// yields a failure row and cannot abort the rest of the batch.
    /// The permit pool lives and dies with this call, so concurrent
    /// requests never share an admission gate.
    pub async fn run(&self, symbols: &[Symbol]) -> Vec<ValuationRecord> {
        let gate = Arc::new(Semaphore::new(self.limit));

        let handles: Vec<JoinHandle<ValuationRecord>> = symbols
            .iter()
            .map(|symbol| {
                let gate = Arc::clone(&gate);
                let source = Arc::clone(&self.source);
                let symbol = symbol.clone();

                tokio::spawn(async move {
                    // The pool outlives every task and is never
                    // closed, so acquisition can only wait. The
                    // permit drops on every exit path.
                    let _permit = gate
                        .acquire_owned()
                        .await
                        .expect("batch permit pool is never closed");

                    match source.metrics(&symbol).await {
                        Ok(metrics) => ValuationRecord::success(symbol, metrics),
                        Err(error) => {
                            tracing::warn!(
                                symbol = %symbol,
                                source = source.name(),
                                error = %error,
                                "metrics fetch failed"
                            );
                            ValuationRecord::failed(symbol)
                        }
                    }
                })
            })
            .collect();

        let mut records = Vec::with_capacity(symbols.len());
        for (symbol, handle) in symbols.iter().zip(handles) {
            let record = match handle.await {
                Ok(record) => record,
                // A panicked task still owes the batch a row.
                Err(join_error) => {
                    tracing::error!(symbol = %symbol, error = %join_error, "fetch task died");
                    ValuationRecord::failed(symbol.clone())
                }
            };
            records.push(record);
        }

        records
    }
}
