//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing + timeout layers)
//!     → middleware/accept_events.rs (advertise, parse, annotate)
//!     → echo handler (reads AcceptedEvents from extensions)
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use middleware::{AcceptEventsLayer, AcceptEventsService};
pub use server::HttpServer;
