use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::domain::{Symbol, ValuationMetrics};
use crate::http::{HttpClient, HttpRequest};
use crate::source::{MetricsSource, SourceError};

/// Finnhub company-basic-financials endpoint.
const METRIC_URL: &str = "https://finnhub.io/api/v1/stock/metric";

/// Upstream budget for one metrics call. There is no retry layer: a
/// call that misses this window becomes a failure row for the
/// request it belongs to.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Finnhub adapter for company valuation ratios.
///
/// Extracts trailing P/E (`metric.peTTM`) and price-to-book
/// (`metric.pb`) from the basic-financials payload.
pub struct FinnhubAdapter {
    http: Arc<dyn HttpClient>,
    token: String,
}

impl FinnhubAdapter {
    pub fn new(http: Arc<dyn HttpClient>, token: impl Into<String>) -> Self {
        Self {
            http,
            token: token.into(),
        }
    }

    fn metric_url(&self, symbol: &Symbol) -> String {
        format!(
            "{METRIC_URL}?symbol={}&metric=all&token={}",
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(&self.token),
        )
    }

    async fn fetch(&self, symbol: &Symbol) -> Result<ValuationMetrics, SourceError> {
        let request = HttpRequest::get(self.metric_url(symbol)).with_timeout(FETCH_TIMEOUT);

        let response = self.http.execute(request).await.map_err(|e| {
            if e.timed_out() {
                SourceError::unavailable("finnhub request timed out")
            } else {
                SourceError::unavailable(format!("finnhub transport error: {}", e.message()))
            }
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "finnhub returned status {}",
                response.status
            )));
        }

        let body: Value = serde_json::from_str(&response.body).map_err(|e| {
            SourceError::invalid_response(format!("failed to parse finnhub response: {e}"))
        })?;

        Ok(normalize_metrics(&body))
    }
}

impl MetricsSource for FinnhubAdapter {
    fn name(&self) -> &'static str {
        "finnhub"
    }

    fn metrics<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<ValuationMetrics, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch(symbol))
    }
}

/// Pull the two ratios out of a raw metrics body.
///
/// A missing or non-object `metric` member yields an empty record
/// rather than an error; per-field garbage becomes a null for that
/// field only.
fn normalize_metrics(body: &Value) -> ValuationMetrics {
    let empty = serde_json::Map::new();
    let metric = body
        .get("metric")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    ValuationMetrics {
        price_per_earnings: metric.get("peTTM").and_then(coerce_finite),
        price_per_book: metric.get("pb").and_then(coerce_finite),
    }
}

/// Lenient numeric coercion: finite numbers pass, numeric strings
/// parse, booleans count as 1/0, everything else is null.
fn coerce_finite(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };

    number.is_finite().then_some(number)
}
