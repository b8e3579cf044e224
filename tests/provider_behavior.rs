//! Behavior-driven tests for the Finnhub adapter.
//!
//! These tests verify HOW the adapter talks to the provider and how
//! it normalizes whatever comes back, using scripted transports with
//! no network involved.

use std::sync::Arc;
use std::time::Duration;

use tickrank_core::{
    FinnhubAdapter, HttpError, MetricsSource, SourceErrorKind, Symbol,
};
use tickrank_tests::ScriptedHttpClient;

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

// =============================================================================
// Finnhub Adapter: Request Construction
// =============================================================================

#[tokio::test]
async fn when_fetching_the_adapter_builds_an_authenticated_metric_request() {
    // Given: an adapter with a known token
    let client = Arc::new(ScriptedHttpClient::ok(r#"{"metric":{}}"#));
    let adapter = FinnhubAdapter::new(client.clone(), "secret-token");

    // When: one symbol is fetched
    adapter
        .metrics(&symbol("AAPL"))
        .await
        .expect("fetch should succeed");

    // Then: exactly one GET with symbol, metric flag, and token
    let requests = client.requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert!(request
        .url
        .starts_with("https://finnhub.io/api/v1/stock/metric?"));
    assert!(request.url.contains("symbol=AAPL"));
    assert!(request.url.contains("metric=all"));
    assert!(request.url.contains("token=secret-token"));
    assert_eq!(request.timeout, Duration::from_secs(15));
}

// =============================================================================
// Finnhub Adapter: Normalization
// =============================================================================

#[tokio::test]
async fn when_the_provider_reports_both_ratios_they_come_back_as_numbers() {
    let client = Arc::new(ScriptedHttpClient::ok(
        r#"{"metric":{"peTTM":27.53,"pb":4.1,"ignored":"yes"}}"#,
    ));
    let adapter = FinnhubAdapter::new(client, "t");

    let metrics = adapter
        .metrics(&symbol("AAPL"))
        .await
        .expect("fetch should succeed");

    assert_eq!(metrics.price_per_earnings, Some(27.53));
    assert_eq!(metrics.price_per_book, Some(4.1));
}

#[tokio::test]
async fn when_the_metric_object_is_missing_the_fetch_succeeds_with_nulls() {
    let client = Arc::new(ScriptedHttpClient::ok(r#"{"symbol":"AAPL"}"#));
    let adapter = FinnhubAdapter::new(client, "t");

    let metrics = adapter
        .metrics(&symbol("AAPL"))
        .await
        .expect("fetch should succeed");

    assert_eq!(metrics.price_per_earnings, None);
    assert_eq!(metrics.price_per_book, None);
}

#[tokio::test]
async fn when_one_field_is_garbage_only_that_field_is_null() {
    let client = Arc::new(ScriptedHttpClient::ok(
        r#"{"metric":{"peTTM":"27.5","pb":{"oops":1}}}"#,
    ));
    let adapter = FinnhubAdapter::new(client, "t");

    let metrics = adapter
        .metrics(&symbol("AAPL"))
        .await
        .expect("fetch should succeed");

    assert_eq!(metrics.price_per_earnings, Some(27.5));
    assert_eq!(metrics.price_per_book, None);
}

// =============================================================================
// Finnhub Adapter: Failure Modes
// =============================================================================

#[tokio::test]
async fn when_the_provider_returns_a_server_error_the_fetch_fails_as_unavailable() {
    let client = Arc::new(ScriptedHttpClient::status(500, "upstream exploded"));
    let adapter = FinnhubAdapter::new(client, "t");

    let error = adapter
        .metrics(&symbol("AAPL"))
        .await
        .expect_err("5xx must fail");

    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    assert!(error.message().contains("500"));
}

#[tokio::test]
async fn when_the_call_times_out_the_fetch_fails_as_unavailable() {
    let client = Arc::new(ScriptedHttpClient::transport_error(HttpError::timeout(
        "request timeout: deadline elapsed",
    )));
    let adapter = FinnhubAdapter::new(client, "t");

    let error = adapter
        .metrics(&symbol("AAPL"))
        .await
        .expect_err("timeout must fail");

    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    assert!(error.message().contains("timed out"));
}

#[tokio::test]
async fn when_the_body_is_not_json_the_fetch_fails_as_invalid_response() {
    let client = Arc::new(ScriptedHttpClient::ok("<html>rate limited</html>"));
    let adapter = FinnhubAdapter::new(client, "t");

    let error = adapter
        .metrics(&symbol("AAPL"))
        .await
        .expect_err("bad body must fail");

    assert_eq!(error.kind(), SourceErrorKind::InvalidResponse);
}
