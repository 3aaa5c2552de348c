//! Flight search server.
//!
//! Takes raw flight itineraries from the Sky-Scrapper API and derives
//! everything a results view needs: formatted times, durations, layover
//! summaries, stop labels, eco strings and pagination windows. Also
//! owns the search-state model that keeps the structured query
//! consistent, serializable to a URL query string, and gated on
//! completeness before a search runs.

pub mod domain;
pub mod presenter;
pub mod query;
pub mod session;
pub mod sky;
pub mod web;
