//! Accept-Events middleware.
//!
//! # Responsibilities
//! - Advertise support with an empty `Accept-Events` response header on
//!   GET and POST
//! - Attach `AcceptedEvents` to the request before the inner service runs
//!
//! # Design Decisions
//! - Never rejects a request; unusable headers only produce a debug log
//! - A handler that sets its own `Accept-Events` response header keeps it
//! - Parser and sorter are shared trait objects so tests can swap them

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{HeaderValue, Request, Response};
use futures_util::future::BoxFuture;
use tower::{Layer, Service};
use tracing::debug;

use crate::events::{evaluate, Outcome, ACCEPT_EVENTS};
use crate::observability::metrics;
use crate::structured::{ListParser, QualitySort, SfvParser, StableQualitySort};

/// Layer that applies [`AcceptEventsService`].
#[derive(Clone)]
pub struct AcceptEventsLayer {
    parser: Arc<dyn ListParser>,
    sorter: Arc<dyn QualitySort>,
}

impl AcceptEventsLayer {
    /// Layer using the `sfv` parser and a stable quality sort.
    pub fn new() -> Self {
        Self {
            parser: Arc::new(SfvParser),
            sorter: Arc::new(StableQualitySort),
        }
    }

    /// Replace the structured-field parser.
    pub fn with_parser(mut self, parser: impl ListParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Replace the quality sort.
    pub fn with_sorter(mut self, sorter: impl QualitySort + 'static) -> Self {
        self.sorter = Arc::new(sorter);
        self
    }
}

impl Default for AcceptEventsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for AcceptEventsLayer {
    type Service = AcceptEventsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AcceptEventsService {
            inner,
            parser: self.parser.clone(),
            sorter: self.sorter.clone(),
        }
    }
}

/// Service that interprets the `Accept-Events` request header.
#[derive(Clone)]
pub struct AcceptEventsService<S> {
    inner: S,
    parser: Arc<dyn ListParser>,
    sorter: Arc<dyn QualitySort>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for AcceptEventsService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let evaluation = evaluate(
            req.method(),
            req.headers(),
            self.parser.as_ref(),
            self.sorter.as_ref(),
        );

        match &evaluation.outcome {
            Outcome::NotApplicable => {}
            Outcome::Unusable(reason) => {
                debug!(method = %req.method(), reason = %reason, "Accept-Events header unusable");
            }
            Outcome::Filtered => {
                debug!(method = %req.method(), "Accept-Events header had no valid entries");
            }
            Outcome::Annotated(count) => {
                debug!(
                    method = %req.method(),
                    count = *count,
                    preferred = evaluation
                        .accepted
                        .as_ref()
                        .and_then(|a| a.preferred())
                        .map(|e| e.name.as_str())
                        .unwrap_or_default(),
                    "Accept-Events attached"
                );
            }
        }
        metrics::record_outcome(&evaluation.outcome);

        let advertise = evaluation.outcome.advertises();
        if let Some(accepted) = evaluation.accepted {
            req.extensions_mut().insert(accepted);
        }

        let future = self.inner.call(req);
        Box::pin(async move {
            let mut response = future.await?;
            if advertise {
                response
                    .headers_mut()
                    .entry(ACCEPT_EVENTS)
                    .or_insert(HeaderValue::from_static(""));
            }
            Ok(response)
        })
    }
}
