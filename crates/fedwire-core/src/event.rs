//! Event definitions
//!
//! A `TimedEvent` pairs a delivery time with a payload. An
//! `OriginatedEvent` embeds one and adds the origin identity, so the
//! delivery layer knows not only when and what but also from whom.
//! Both are immutable once built.

use std::cmp::Ordering;

use crate::{LogicalTime, OriginId};

/// Timestamped event
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimedEvent<T> {
    time: LogicalTime,
    payload: T,
}

impl<T> TimedEvent<T> {
    pub fn new(time: impl Into<LogicalTime>, payload: T) -> Self {
        TimedEvent {
            time: time.into(),
            payload,
        }
    }

    #[inline]
    pub fn time(&self) -> LogicalTime {
        self.time
    }

    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Timestamped event tagged with the identity of its producer
///
/// Equality and hashing cover time, payload and origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OriginatedEvent<T> {
    event: TimedEvent<T>,
    origin: OriginId,
}

impl<T> OriginatedEvent<T> {
    pub fn new(time: impl Into<LogicalTime>, payload: T, origin: impl Into<OriginId>) -> Self {
        OriginatedEvent {
            event: TimedEvent::new(time, payload),
            origin: origin.into(),
        }
    }

    /// Wrap an existing timed event
    pub fn from_timed(event: TimedEvent<T>, origin: OriginId) -> Self {
        OriginatedEvent { event, origin }
    }

    #[inline]
    pub fn time(&self) -> LogicalTime {
        self.event.time
    }

    #[inline]
    pub fn payload(&self) -> &T {
        &self.event.payload
    }

    #[inline]
    pub fn origin(&self) -> OriginId {
        self.origin
    }

    /// The embedded timed event
    #[inline]
    pub fn timed(&self) -> &TimedEvent<T> {
        &self.event
    }

    pub fn into_parts(self) -> (LogicalTime, T, OriginId) {
        (self.event.time, self.event.payload, self.origin)
    }

    /// Delivery order: earlier time first, ties broken by origin.
    /// Payloads do not take part.
    pub fn delivery_cmp(&self, other: &Self) -> Ordering {
        self.time()
            .cmp(&other.time())
            .then_with(|| self.origin.cmp(&other.origin))
    }
}
