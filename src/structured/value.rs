//! Owned representation of a parsed structured-field list.

use indexmap::IndexMap;
use serde::Serialize;

use crate::structured::quality::quality_of;

/// Parameter map attached to a list member. Keys are case-sensitive.
pub type Parameters = IndexMap<String, Value>;

/// A parsed list, in the order the client sent it.
pub type StructuredList = Vec<Entry>;

/// Primary value of a list member (or of a parameter).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Quoted string, e.g. `"prep"`.
    String(String),
    /// Bare identifier, e.g. `prep`.
    Token(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    ByteSequence(Vec<u8>),
    InnerList(Vec<Value>),
    /// Anything else the grammar can produce (dates, display strings, ...).
    Other(String),
}

impl Value {
    /// Textual form for strings and tokens.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Token(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric form for integers and decimals.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

/// One list member: a value plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub value: Value,
    pub params: Parameters,
}

impl Entry {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            params: Parameters::new(),
        }
    }

    /// Builder-style helper to attach a parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Quality weight taken from the `q` parameter.
    pub fn quality(&self) -> f64 {
        quality_of(&self.params)
    }
}
