//! Domain types for the flight search server.
//!
//! This module contains the core model types that represent validated
//! flight data. Invariants (non-empty legs, stop counts derived from the
//! segment list) are enforced at construction time, so code that receives
//! these types can trust their validity.

mod airport;
mod error;
mod itinerary;

pub use airport::Airport;
pub use error::DomainError;
pub use itinerary::{Carrier, Itinerary, Leg, Place, Segment, SegmentCarrier};
