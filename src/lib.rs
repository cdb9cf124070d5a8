//! `Accept-Events` negotiation for Axum/Tower services.
//!
//! Parses the structured-field `Accept-Events` request header on GET and
//! POST, attaches the valid event names ordered by quality as
//! [`events::AcceptedEvents`] in the request extensions, and advertises
//! support with an empty `Accept-Events` response header.

pub mod config;
pub mod events;
pub mod http;
pub mod observability;
pub mod structured;

pub use config::ServerConfig;
pub use events::{AcceptEventsExt, AcceptedEvent, AcceptedEvents};
pub use http::{AcceptEventsLayer, HttpServer};
