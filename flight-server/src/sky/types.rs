//! Sky-Scrapper API response DTOs.
//!
//! These types map directly to the JSON responses. They use `Option`
//! liberally because the API omits fields rather than sending nulls in
//! many cases, and a partial record should degrade rather than fail
//! the whole response.

use serde::Deserialize;

/// Response from `searchAirport`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportLookupResponse {
    /// True on success; error payloads come with `status: false`.
    pub status: Option<bool>,

    pub data: Option<Vec<AirportDto>>,
}

/// One location suggestion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportDto {
    pub sky_id: Option<String>,
    pub entity_id: Option<String>,
    pub presentation: Option<PresentationDto>,
}

/// Display fields of a location suggestion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDto {
    /// Full suggestion line, e.g. "London Heathrow (LHR)".
    pub suggestion_title: Option<String>,

    /// Bare title, e.g. "London Heathrow".
    pub title: Option<String>,
}

/// Response from `searchFlights`.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchResponse {
    pub status: Option<bool>,

    /// Absent on failure; absence means "no results", not an error.
    pub data: Option<FlightSearchData>,
}

/// Payload of a flight search.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchData {
    pub itineraries: Option<Vec<ItineraryDto>>,
}

/// One priced itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryDto {
    pub id: Option<String>,
    pub legs: Option<Vec<LegDto>>,
    pub price: Option<PriceDto>,
    pub eco: Option<EcoDto>,
}

/// Pre-formatted price.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceDto {
    pub formatted: Option<String>,
}

/// Eco metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoDto {
    /// CO2 delta versus a typical flight on the route, in kg.
    pub eco_contender_delta: Option<f64>,
}

/// One directional leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub duration_in_minutes: Option<i64>,
    /// Sent by the API but recomputed locally from the segment list.
    pub stop_count: Option<i64>,
    pub origin: Option<PlaceDto>,
    pub destination: Option<PlaceDto>,
    pub carriers: Option<CarriersDto>,
    pub segments: Option<Vec<SegmentDto>>,
    pub time_delta_in_days: Option<i64>,
}

/// A leg or segment endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    pub name: Option<String>,
    pub display_code: Option<String>,
}

/// Carrier lists for a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct CarriersDto {
    pub marketing: Option<Vec<CarrierDto>>,
}

/// One marketing carrier on a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierDto {
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

/// One physical flight.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    pub id: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub origin: Option<PlaceDto>,
    pub destination: Option<PlaceDto>,
    pub duration_in_minutes: Option<i64>,
    pub marketing_carrier: Option<MarketingCarrierDto>,
    pub flight_number: Option<String>,
}

/// The marketing carrier of a segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCarrierDto {
    pub name: Option<String>,
    /// Airline code, e.g. "QR".
    pub alternate_id: Option<String>,
}
