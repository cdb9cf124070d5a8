//! Header parser adapter.
//!
//! # Responsibilities
//! - Look up `Accept-Events` (header names are case-insensitive)
//! - Combine repeated header lines into one list
//! - Hand the text to the configured `ListParser`
//!
//! # Design Decisions
//! - Absent, empty and malformed headers share one error type; callers
//!   treat every variant as "no preference"
//! - The parser error is kept for debug logging only

use axum::http::{HeaderMap, HeaderName};
use thiserror::Error;

use crate::structured::{ListParser, ParseError, StructuredList};

/// Request and response header carrying event preferences.
pub const ACCEPT_EVENTS: HeaderName = HeaderName::from_static("accept-events");

/// Why a request's `Accept-Events` header could not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeaderUnusable {
    #[error("header absent")]
    Absent,
    #[error("header empty")]
    Empty,
    #[error("header is not visible ASCII")]
    NotText,
    #[error(transparent)]
    Malformed(#[from] ParseError),
}

/// Read and parse the `Accept-Events` request header.
pub fn read_header(
    headers: &HeaderMap,
    parser: &dyn ListParser,
) -> Result<StructuredList, HeaderUnusable> {
    let mut lines = headers.get_all(ACCEPT_EVENTS).iter().peekable();
    if lines.peek().is_none() {
        return Err(HeaderUnusable::Absent);
    }

    let mut raw = String::new();
    for line in lines {
        let text = line.to_str().map_err(|_| HeaderUnusable::NotText)?.trim();
        if text.is_empty() {
            continue;
        }
        if !raw.is_empty() {
            raw.push_str(", ");
        }
        raw.push_str(text);
    }

    if raw.is_empty() {
        return Err(HeaderUnusable::Empty);
    }

    Ok(parser.parse_list(&raw)?)
}
