//! Ordering of list members by quality weight.

use crate::structured::value::{Entry, Parameters, Value};

/// Weight of an entry that carries no usable `q` parameter.
pub const DEFAULT_QUALITY: f64 = 1.0;

/// Quality weight read from a parameter map.
///
/// A missing or non-numeric `q` counts as the maximum weight.
pub fn quality_of(params: &Parameters) -> f64 {
    params
        .get("q")
        .and_then(Value::as_f64)
        .filter(|q| !q.is_nan())
        .unwrap_or(DEFAULT_QUALITY)
}

/// Orders entries by descending `q`.
///
/// Implementations must be stable: entries of equal weight keep their
/// relative input order.
pub trait QualitySort: Send + Sync {
    fn sort(&self, entries: Vec<Entry>) -> Vec<Entry>;
}

/// Stable descending sort on [`Entry::quality`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StableQualitySort;

impl QualitySort for StableQualitySort {
    fn sort(&self, mut entries: Vec<Entry>) -> Vec<Entry> {
        // slice::sort_by is stable
        entries.sort_by(|a, b| b.quality().total_cmp(&a.quality()));
        entries
    }
}
