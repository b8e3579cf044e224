//! Stable multi-key sort over valuation rows.

use std::cmp::Ordering;

use crate::domain::{SortDirection, SortKey, SortSpec, ValuationRecord};

/// Sort valuation rows by the requested key.
///
/// The sort is stable: rows that compare equal keep their input
/// order, and an all-null key set degenerates to the input order.
/// Missing values compare after present ones, so ascending order
/// lists them last. `desc` reverses the entire comparison including
/// that missing-value flag, which places missing values first under
/// `desc`. That is the service's historical observable ordering and
/// is pinned by tests.
pub fn rank(mut records: Vec<ValuationRecord>, spec: &SortSpec) -> Vec<ValuationRecord> {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, spec.by);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    records
}

fn compare(a: &ValuationRecord, b: &ValuationRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::PricePerEarnings => field_ordering(a.price_per_earnings, b.price_per_earnings),
        SortKey::PricePerBook => field_ordering(a.price_per_book, b.price_per_book),
        SortKey::PricePerBookValue => {
            field_ordering(a.price_per_book_value, b.price_per_book_value)
        }
        SortKey::PeThenPb => field_ordering(a.price_per_earnings, b.price_per_earnings)
            .then_with(|| field_ordering(a.price_per_book, b.price_per_book)),
    }
}

/// `(is_missing, value)` ordering for one key component. Stored
/// values are always finite, so `total_cmp` agrees with the usual
/// numeric order.
fn field_ordering(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
