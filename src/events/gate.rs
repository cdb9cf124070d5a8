//! Method gate.

use axum::http::Method;

/// Only GET and POST requests take part in event negotiation.
pub fn is_applicable(method: &Method) -> bool {
    method == Method::GET || method == Method::POST
}
