//! Sky-Scrapper flight API client.
//!
//! Wire DTOs, conversion into domain types, and the HTTP client for the
//! two consumed endpoints: airport lookup and flight search.

mod client;
mod convert;
mod error;
mod types;

pub use client::{SkyClient, SkyConfig};
pub use convert::{convert_airports, convert_itineraries};
pub use error::SkyError;
pub use types::{AirportLookupResponse, FlightSearchResponse};
