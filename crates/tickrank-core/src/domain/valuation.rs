use serde::{Deserialize, Serialize};

use crate::domain::Symbol;

/// Fixed tag carried by rows whose upstream fetch failed.
pub const FAILED_TO_FETCH: &str = "failed_to_fetch";

/// Valuation ratios for one symbol after provider normalization.
///
/// A value is present only when the provider reported a finite
/// number for that field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValuationMetrics {
    pub price_per_earnings: Option<f64>,
    pub price_per_book: Option<f64>,
}

/// One row of a ranked response.
///
/// A row is either a success (`error` absent; individual ratios may
/// still be null when the provider omitted or corrupted them) or a
/// failure (`error` set to [`FAILED_TO_FETCH`], every ratio null).
/// Rows are only built through [`ValuationRecord::success`] and
/// [`ValuationRecord::failed`], which keeps that split intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub symbol: Symbol,
    pub price_per_earnings: Option<f64>,
    pub price_per_book: Option<f64>,
    /// Second wire name for the price-to-book ratio, always equal to
    /// `price_per_book`.
    pub price_per_book_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValuationRecord {
    pub fn success(symbol: Symbol, metrics: ValuationMetrics) -> Self {
        Self {
            symbol,
            price_per_earnings: metrics.price_per_earnings,
            price_per_book: metrics.price_per_book,
            price_per_book_value: metrics.price_per_book,
            error: None,
        }
    }

    pub fn failed(symbol: Symbol) -> Self {
        Self {
            symbol,
            price_per_earnings: None,
            price_per_book: None,
            price_per_book_value: None,
            error: Some(FAILED_TO_FETCH.to_owned()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_row_mirrors_book_ratio_under_both_names() {
        let metrics = ValuationMetrics {
            price_per_earnings: Some(24.1),
            price_per_book: Some(3.2),
        };
        let row = ValuationRecord::success(Symbol::parse("AAPL").expect("valid"), metrics);

        assert_eq!(row.price_per_book, Some(3.2));
        assert_eq!(row.price_per_book_value, Some(3.2));
        assert!(!row.is_failed());
    }

    #[test]
    fn failure_row_nulls_every_ratio() {
        let row = ValuationRecord::failed(Symbol::parse("AAPL").expect("valid"));

        assert!(row.is_failed());
        assert_eq!(row.error.as_deref(), Some(FAILED_TO_FETCH));
        assert_eq!(row.price_per_earnings, None);
        assert_eq!(row.price_per_book, None);
        assert_eq!(row.price_per_book_value, None);
    }

    #[test]
    fn wire_format_uses_camel_case_and_omits_error_on_success() {
        let metrics = ValuationMetrics {
            price_per_earnings: Some(10.0),
            price_per_book: None,
        };
        let row = ValuationRecord::success(Symbol::parse("MSFT").expect("valid"), metrics);
        let json = serde_json::to_value(&row).expect("serializable");

        assert_eq!(json["symbol"], "MSFT");
        assert_eq!(json["pricePerEarnings"], 10.0);
        assert!(json["pricePerBook"].is_null());
        assert!(json["pricePerBookValue"].is_null());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn wire_format_carries_error_tag_on_failure() {
        let row = ValuationRecord::failed(Symbol::parse("MSFT").expect("valid"));
        let json = serde_json::to_value(&row).expect("serializable");

        assert_eq!(json["error"], "failed_to_fetch");
        assert!(json["pricePerEarnings"].is_null());
    }
}
