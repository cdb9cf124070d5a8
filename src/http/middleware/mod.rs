pub mod accept_events;

pub use accept_events::{AcceptEventsLayer, AcceptEventsService};
