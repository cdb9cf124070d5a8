//! Entry normalizer and sorter.
//!
//! # Responsibilities
//! - Keep entries whose value is a string or a token
//! - Convert tokens to plain strings
//! - Order survivors with the configured `QualitySort`
//!
//! # Design Decisions
//! - Invalid entries are dropped silently; they are not errors
//! - Parameters pass through untouched
//! - The sorter only ever sees valid, non-empty input

use crate::events::accepted::{AcceptedEvent, AcceptedEvents};
use crate::structured::{Entry, QualitySort, StructuredList, Value};

/// Filter, normalize and sort a parsed list.
///
/// Returns `None` when nothing usable remains.
pub fn normalize(list: StructuredList, sorter: &dyn QualitySort) -> Option<AcceptedEvents> {
    let valid: Vec<Entry> = list
        .into_iter()
        .filter_map(|entry| match entry.value {
            Value::String(s) | Value::Token(s) => Some(Entry {
                value: Value::String(s),
                params: entry.params,
            }),
            Value::Integer(_)
            | Value::Decimal(_)
            | Value::Boolean(_)
            | Value::ByteSequence(_)
            | Value::InnerList(_)
            | Value::Other(_) => None,
        })
        .collect();

    if valid.is_empty() {
        return None;
    }

    // A sorter may only reorder; anything it hands back that is not
    // string-like is dropped like any other invalid entry.
    let events = sorter
        .sort(valid)
        .into_iter()
        .filter_map(|entry| match entry.value {
            Value::String(name) | Value::Token(name) => Some(AcceptedEvent {
                name,
                params: entry.params,
            }),
            _ => None,
        })
        .collect();

    AcceptedEvents::new(events)
}
