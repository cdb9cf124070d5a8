//! Structured-field list parsing.
//!
//! # Responsibilities
//! - Define the `ListParser` seam used by the header adapter
//! - Provide the default implementation on top of `sfv` (RFC 8941 / RFC 9651)
//! - Convert `sfv` items into the owned `Value` model
//!
//! # Design Decisions
//! - Grammar errors are reported, never panicked on
//! - Unknown bare item kinds are kept as `Value::Other` so filtering stays
//!   a caller decision

use sfv::{BareItem, List, ListEntry, Parser};
use thiserror::Error;

use crate::structured::value::{Entry, Parameters, StructuredList, Value};

/// Failure to interpret header text as a structured-field list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid structured field list: {0}")]
    Grammar(String),
}

/// Turns raw header text into a structured list.
pub trait ListParser: Send + Sync {
    fn parse_list(&self, raw: &str) -> Result<StructuredList, ParseError>;
}

/// `ListParser` backed by the `sfv` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SfvParser;

impl ListParser for SfvParser {
    fn parse_list(&self, raw: &str) -> Result<StructuredList, ParseError> {
        let list: List = Parser::new(raw)
            .parse()
            .map_err(|e| ParseError::Grammar(e.to_string()))?;

        Ok(list.into_iter().map(convert_entry).collect())
    }
}

fn convert_entry(member: ListEntry) -> Entry {
    match member {
        ListEntry::Item(item) => Entry {
            value: convert_bare_item(item.bare_item),
            params: convert_params(item.params),
        },
        ListEntry::InnerList(inner) => Entry {
            value: Value::InnerList(
                inner
                    .items
                    .into_iter()
                    .map(|item| convert_bare_item(item.bare_item))
                    .collect(),
            ),
            params: convert_params(inner.params),
        },
    }
}

fn convert_params(params: sfv::Parameters) -> Parameters {
    params
        .into_iter()
        .map(|(key, value)| (key.into(), convert_bare_item(value)))
        .collect()
}

fn convert_bare_item(item: BareItem) -> Value {
    match item {
        BareItem::String(s) => Value::String(s.into()),
        BareItem::Token(t) => Value::Token(t.into()),
        BareItem::Integer(i) => Value::Integer(i.into()),
        BareItem::Decimal(d) => Value::Decimal(i64::from(d.as_integer_scaled_1000()) as f64 / 1000.0),
        BareItem::Boolean(b) => Value::Boolean(b),
        BareItem::ByteSequence(bytes) => Value::ByteSequence(bytes),
        other => Value::Other(format!("{:?}", other)),
    }
}
