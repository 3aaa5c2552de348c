//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Airport;
use crate::presenter::ItinerarySummary;

/// Request to look up airports.
#[derive(Debug, Deserialize)]
pub struct AirportSearchRequest {
    /// Free-text query; empty yields no suggestions.
    pub q: String,
}

/// One airport suggestion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportResult {
    pub name: String,
    pub sky_id: String,
    pub entity_id: String,
}

impl AirportResult {
    /// Create from a domain Airport.
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            name: airport.name.clone(),
            sky_id: airport.sky_id.clone(),
            entity_id: airport.entity_id.clone(),
        }
    }
}

/// Response for airport lookup.
#[derive(Debug, Serialize)]
pub struct AirportSearchResponse {
    pub airports: Vec<AirportResult>,
}

/// Pagination parameters carried alongside the query-string fields.
#[derive(Debug, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<usize>,
}

/// Response for a flight search: one page of display-ready summaries.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResults {
    pub itineraries: Vec<ItinerarySummary>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_result_from_airport() {
        let airport = Airport::new("Doha Hamad (DOH)", "27540734", "DOH");
        let result = AirportResult::from_airport(&airport);
        assert_eq!(result.name, "Doha Hamad (DOH)");
        assert_eq!(result.sky_id, "DOH");
        assert_eq!(result.entity_id, "27540734");
    }

    #[test]
    fn airport_result_serializes_camel_case() {
        let airport = Airport::new("Doha Hamad (DOH)", "27540734", "DOH");
        let json = serde_json::to_value(AirportResult::from_airport(&airport)).unwrap();
        assert!(json.get("skyId").is_some());
        assert!(json.get("entityId").is_some());
    }
}
