//! Search form state.
//!
//! `QueryState` holds the structured search query (trip type, passenger
//! count, cabin class, origin/destination identifiers, dates), keeps it
//! consistent under field-by-field mutation, serializes to and from a
//! flat URL query string, and gates search submission on completeness.

mod state;

pub use state::{QueryState, TravelClass, TripType};
