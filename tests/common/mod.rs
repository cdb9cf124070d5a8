//! Shared test doubles and request helpers.
#![allow(dead_code)]

use accept_events::structured::{Entry, ListParser, ParseError, QualitySort, StructuredList};
use axum::body::Body;
use axum::http::{HeaderMap, Request};
use axum::Router;
use serde_json::Value as Json;
use tower::ServiceExt;

/// Parser that ignores its input and returns a canned list.
pub struct StubParser(pub StructuredList);

impl ListParser for StubParser {
    fn parse_list(&self, _raw: &str) -> Result<StructuredList, ParseError> {
        Ok(self.0.clone())
    }
}

/// Parser that rejects everything.
pub struct FailingParser;

impl ListParser for FailingParser {
    fn parse_list(&self, _raw: &str) -> Result<StructuredList, ParseError> {
        Err(ParseError::Grammar("Parse Error".into()))
    }
}

/// Sorter that leaves the order untouched.
pub struct IdentitySort;

impl QualitySort for IdentitySort {
    fn sort(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries
    }
}

/// Send one request through the router and decode the echo body.
pub async fn send(router: Router, method: &str, accept_events: Option<&str>) -> (HeaderMap, Json) {
    let mut builder = Request::builder().method(method).uri("/stream");
    if let Some(value) = accept_events {
        builder = builder.header("Accept-Events", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = router.oneshot(request).await.unwrap();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (headers, json)
}
