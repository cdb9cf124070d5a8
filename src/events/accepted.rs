//! The request annotation consumed by downstream handlers.

use axum::http::Request;
use serde::Serialize;

use crate::structured::{quality_of, Parameters};

/// One event name the client is willing to receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedEvent {
    pub name: String,
    pub params: Parameters,
}

impl AcceptedEvent {
    /// Quality weight of this event, `1.0` when the client gave none.
    pub fn quality(&self) -> f64 {
        quality_of(&self.params)
    }
}

/// Accepted events ordered from most to least preferred.
///
/// Never empty: a request with no usable preference carries no
/// `AcceptedEvents` at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AcceptedEvents(Vec<AcceptedEvent>);

impl AcceptedEvents {
    /// Wrap an already ordered list; `None` if it is empty.
    pub fn new(events: Vec<AcceptedEvent>) -> Option<Self> {
        if events.is_empty() {
            None
        } else {
            Some(Self(events))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AcceptedEvent> {
        self.0.iter()
    }

    /// Event names in preference order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.name.as_str())
    }

    /// The most preferred event.
    pub fn preferred(&self) -> Option<&AcceptedEvent> {
        self.0.first()
    }

    pub fn get(&self, name: &str) -> Option<&AcceptedEvent> {
        self.0.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn into_inner(self) -> Vec<AcceptedEvent> {
        self.0
    }
}

impl<'a> IntoIterator for &'a AcceptedEvents {
    type Item = &'a AcceptedEvent;
    type IntoIter = std::slice::Iter<'a, AcceptedEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Access to the annotation on a request.
pub trait AcceptEventsExt {
    fn accepted_events(&self) -> Option<&AcceptedEvents>;
}

impl<B> AcceptEventsExt for Request<B> {
    fn accepted_events(&self) -> Option<&AcceptedEvents> {
        self.extensions().get::<AcceptedEvents>()
    }
}
