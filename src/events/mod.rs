//! `Accept-Events` request interpretation.
//!
//! # Data Flow
//! ```text
//! request method + headers
//!     → gate.rs (GET/POST only)
//!     → adapter.rs (header text → StructuredList, or HeaderUnusable)
//!     → normalize.rs (filter string-like entries, tokens → strings, sort by q)
//!     → accepted.rs (AcceptedEvents, stored in request extensions)
//! ```
//!
//! # Design Decisions
//! - Stateless: every request is evaluated from scratch
//! - Annotation is all-or-nothing; an empty result is never attached
//! - Client mistakes degrade to "no preference", never to an error response

pub mod accepted;
pub mod adapter;
pub mod gate;
pub mod normalize;

pub use accepted::{AcceptEventsExt, AcceptedEvent, AcceptedEvents};
pub use adapter::{read_header, HeaderUnusable, ACCEPT_EVENTS};
pub use gate::is_applicable;
pub use normalize::normalize;

use axum::http::{HeaderMap, Method};

use crate::structured::{ListParser, QualitySort};

/// How a single request was classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Method is neither GET nor POST.
    NotApplicable,
    /// Header absent, empty or malformed.
    Unusable(HeaderUnusable),
    /// Header parsed but no entry survived filtering.
    Filtered,
    /// Annotation attached with this many entries.
    Annotated(usize),
}

impl Outcome {
    /// Short label used for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::NotApplicable => "not_applicable",
            Outcome::Unusable(HeaderUnusable::Absent) => "absent",
            Outcome::Unusable(HeaderUnusable::Empty) => "empty",
            Outcome::Unusable(HeaderUnusable::NotText) => "not_text",
            Outcome::Unusable(HeaderUnusable::Malformed(_)) => "malformed",
            Outcome::Filtered => "filtered",
            Outcome::Annotated(_) => "annotated",
        }
    }

    /// Whether the `Accept-Events` response header should be advertised.
    pub fn advertises(&self) -> bool {
        !matches!(self, Outcome::NotApplicable)
    }
}

/// Result of running the whole pipeline over one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub accepted: Option<AcceptedEvents>,
}

/// Gatekeeper, adapter and normalizer in sequence.
pub fn evaluate(
    method: &Method,
    headers: &HeaderMap,
    parser: &dyn ListParser,
    sorter: &dyn QualitySort,
) -> Evaluation {
    if !is_applicable(method) {
        return Evaluation {
            outcome: Outcome::NotApplicable,
            accepted: None,
        };
    }

    let list = match read_header(headers, parser) {
        Ok(list) => list,
        Err(reason) => {
            return Evaluation {
                outcome: Outcome::Unusable(reason),
                accepted: None,
            }
        }
    };

    match normalize(list, sorter) {
        Some(accepted) => Evaluation {
            outcome: Outcome::Annotated(accepted.len()),
            accepted: Some(accepted),
        },
        None => Evaluation {
            outcome: Outcome::Filtered,
            accepted: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured::{SfvParser, StableQualitySort};
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_EVENTS, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_other_methods_not_applicable() {
        for method in [Method::PUT, Method::DELETE, Method::HEAD, Method::OPTIONS, Method::PATCH] {
            let eval = evaluate(&method, &headers(r#""prep""#), &SfvParser, &StableQualitySort);
            assert_eq!(eval.outcome, Outcome::NotApplicable);
            assert!(!eval.outcome.advertises());
            assert!(eval.accepted.is_none());
        }
    }

    #[test]
    fn test_absent_header() {
        let eval = evaluate(&Method::GET, &HeaderMap::new(), &SfvParser, &StableQualitySort);
        assert_eq!(eval.outcome, Outcome::Unusable(HeaderUnusable::Absent));
        assert!(eval.outcome.advertises());
        assert!(eval.accepted.is_none());
    }

    #[test]
    fn test_malformed_header() {
        let eval = evaluate(&Method::POST, &headers("high,,low"), &SfvParser, &StableQualitySort);
        assert_eq!(eval.outcome.label(), "malformed");
        assert!(eval.accepted.is_none());
    }

    #[test]
    fn test_all_filtered() {
        let eval = evaluate(&Method::GET, &headers("200, ?0"), &SfvParser, &StableQualitySort);
        assert_eq!(eval.outcome, Outcome::Filtered);
        assert!(eval.accepted.is_none());
    }

    #[test]
    fn test_annotated() {
        let eval = evaluate(
            &Method::GET,
            &headers(r#""low"; q=0.5, "high"; q=0.9"#),
            &SfvParser,
            &StableQualitySort,
        );
        assert_eq!(eval.outcome, Outcome::Annotated(2));
        let accepted = eval.accepted.unwrap();
        assert_eq!(accepted.names().collect::<Vec<_>>(), vec!["high", "low"]);
    }
}
