//! Sky-Scrapper HTTP client.
//!
//! Async methods for the two consumed endpoints: airport lookup and
//! flight search. Handles RapidAPI authentication and conversion to
//! domain types.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::domain::{Airport, Itinerary};
use crate::query::QueryState;

use super::convert::{convert_airports, convert_itineraries};
use super::error::SkyError;
use super::types::{AirportLookupResponse, FlightSearchResponse};

/// Default base URL for the Sky-Scrapper API.
const DEFAULT_BASE_URL: &str = "https://sky-scrapper.p.rapidapi.com";

/// RapidAPI host header value for the production API.
const RAPIDAPI_HOST: &str = "sky-scrapper.p.rapidapi.com";

/// Configuration for the Sky-Scrapper client.
#[derive(Debug, Clone)]
pub struct SkyConfig {
    /// RapidAPI key for x-rapidapi-key header authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SkyConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Sky-Scrapper flight API.
#[derive(Debug, Clone)]
pub struct SkyClient {
    http: reqwest::Client,
    base_url: String,
}

impl SkyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SkyConfig) -> Result<Self, SkyError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| SkyError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-rapidapi-key"), api_key);
        headers.insert(
            HeaderName::from_static("x-rapidapi-host"),
            HeaderValue::from_static(RAPIDAPI_HOST),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Look up airports matching a free-text query.
    ///
    /// An empty query performs no lookup and yields no suggestions;
    /// that is a no-op, not an error.
    pub async fn search_airports(&self, query: &str) -> Result<Vec<Airport>, SkyError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/v1/flights/searchAirport", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("locale", "en-US")])
            .send()
            .await?;

        let body = check_status(response).await?;

        let response: AirportLookupResponse =
            serde_json::from_str(&body).map_err(|e| SkyError::Json {
                message: e.to_string(),
            })?;

        if response.status == Some(false) {
            debug!("airport lookup returned status=false for {query:?}");
            return Ok(Vec::new());
        }

        Ok(convert_airports(response.data.unwrap_or_default()))
    }

    /// Search flights for a complete query.
    ///
    /// The query must satisfy `QueryState::is_complete`; incomplete
    /// queries are rejected locally without a network call. An absent
    /// or empty payload is "no results", not an error.
    pub async fn search_flights(&self, query: &QueryState) -> Result<Vec<Itinerary>, SkyError> {
        if !query.is_complete() {
            return Err(SkyError::IncompleteQuery);
        }

        let url = format!("{}/api/v1/flights/searchFlights", self.base_url);

        // is_complete guarantees the ids and departure date are present
        let mut params: Vec<(&str, String)> = vec![
            (
                "originSkyId",
                query.origin_sky_id.clone().unwrap_or_default(),
            ),
            (
                "destinationSkyId",
                query.destination_sky_id.clone().unwrap_or_default(),
            ),
            (
                "originEntityId",
                query.origin_entity_id.clone().unwrap_or_default(),
            ),
            (
                "destinationEntityId",
                query.destination_entity_id.clone().unwrap_or_default(),
            ),
            (
                "date",
                query
                    .departure_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
        ];

        if let Some(return_date) = query.effective_return_date() {
            params.push(("returnDate", return_date.format("%Y-%m-%d").to_string()));
        }

        params.push(("cabinClass", query.travel_class.as_str().to_string()));
        params.push(("adults", query.passengers.to_string()));
        params.push(("sortBy", "best".to_string()));
        params.push(("currency", "USD".to_string()));
        params.push(("market", "en-US".to_string()));
        params.push(("countryCode", "US".to_string()));

        let response = self.http.get(&url).query(&params).send().await?;

        let body = check_status(response).await?;

        let response: FlightSearchResponse =
            serde_json::from_str(&body).map_err(|e| SkyError::Json {
                message: e.to_string(),
            })?;

        if response.status == Some(false) {
            debug!("flight search returned status=false");
            return Ok(Vec::new());
        }

        // Absence of data is "no results", not a failure
        let Some(data) = response.data else {
            debug!("flight search returned no data payload");
            return Ok(Vec::new());
        };

        Ok(convert_itineraries(data.itineraries.unwrap_or_default()))
    }
}

/// Map HTTP status failures to errors and return the response body.
async fn check_status(response: reqwest::Response) -> Result<String, SkyError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(SkyError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(SkyError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SkyError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}
