//! Query state and its URL query-string codec.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Airport;

/// Date format used in query strings and API calls (ISO date, no time).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether the search is one-way or round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    OneWay,
    #[default]
    RoundTrip,
}

impl TripType {
    /// The wire form used in query strings: "one-way" or "round-trip".
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
        }
    }

    /// Parse the wire form. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "one-way" => Some(TripType::OneWay),
            "round-trip" => Some(TripType::RoundTrip),
            _ => None,
        }
    }
}

/// Cabin class for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelClass {
    #[default]
    Economy,
    Business,
    First,
}

impl TravelClass {
    /// The wire form used in query strings and the search API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "economy",
            TravelClass::Business => "business",
            TravelClass::First => "first",
        }
    }

    /// Parse the wire form. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "economy" => Some(TravelClass::Economy),
            "business" => Some(TravelClass::Business),
            "first" => Some(TravelClass::First),
            _ => None,
        }
    }
}

/// The structured search query behind the search form.
///
/// Created with defaults (round-trip, 1 passenger, economy, empty
/// origin/destination), mutated field by field by user input, serialized
/// to a query string at submission, and deserialized from one when a
/// results view is opened directly.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub trip_type: TripType,
    /// Number of travellers, at least 1 for a complete query.
    pub passengers: u32,
    pub travel_class: TravelClass,
    /// Free-text origin label, display only.
    pub from: String,
    /// Free-text destination label, display only.
    pub to: String,
    /// Set only once a matching airport has been chosen.
    pub origin_sky_id: Option<String>,
    pub destination_sky_id: Option<String>,
    pub origin_entity_id: Option<String>,
    pub destination_entity_id: Option<String>,
    pub departure_date: Option<NaiveDate>,
    /// Meaningful only when `trip_type` is round-trip; a stale value may
    /// remain stored after switching to one-way and is ignored then.
    pub return_date: Option<NaiveDate>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            trip_type: TripType::RoundTrip,
            passengers: 1,
            travel_class: TravelClass::Economy,
            from: String::new(),
            to: String::new(),
            origin_sky_id: None,
            destination_sky_id: None,
            origin_entity_id: None,
            destination_entity_id: None,
            departure_date: None,
            return_date: None,
        }
    }
}

/// Flat all-string representation used for the query-string codec.
///
/// Stringifying every value is lossy for types, which is acceptable
/// because deserialization re-parses known field types with explicit
/// per-field defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireQuery {
    trip_type: String,
    passengers: String,
    travel_class: String,
    from: String,
    to: String,
    origin_sky_id: String,
    destination_sky_id: String,
    origin_entity_id: String,
    destination_entity_id: String,
    departure_date: String,
    return_date: String,
}

impl QueryState {
    /// Record the chosen origin airport: label plus both opaque ids.
    pub fn choose_origin(&mut self, airport: &Airport) {
        self.from = airport.name.clone();
        self.origin_sky_id = Some(airport.sky_id.clone());
        self.origin_entity_id = Some(airport.entity_id.clone());
    }

    /// Record the chosen destination airport: label plus both opaque ids.
    pub fn choose_destination(&mut self, airport: &Airport) {
        self.to = airport.name.clone();
        self.destination_sky_id = Some(airport.sky_id.clone());
        self.destination_entity_id = Some(airport.entity_id.clone());
    }

    /// The return date as it should be used for display and search.
    ///
    /// A one-way trip never has a return date, even if switching the trip
    /// type left a stale value stored.
    pub fn effective_return_date(&self) -> Option<NaiveDate> {
        match self.trip_type {
            TripType::OneWay => None,
            TripType::RoundTrip => self.return_date,
        }
    }

    /// Whether the query is complete enough to submit a search.
    ///
    /// Requires at least one passenger, all four origin/destination
    /// identifiers, and a departure date; round trips additionally
    /// require a return date. Pure, so it can be re-evaluated on every
    /// field change.
    pub fn is_complete(&self) -> bool {
        let has_ids = self.origin_sky_id.is_some()
            && self.origin_entity_id.is_some()
            && self.destination_sky_id.is_some()
            && self.destination_entity_id.is_some();

        let base = self.passengers >= 1 && has_ids && self.departure_date.is_some();

        match self.trip_type {
            TripType::OneWay => base,
            TripType::RoundTrip => base && self.return_date.is_some(),
        }
    }

    /// Serialize every field to a flat key/value query string.
    ///
    /// Keys are the camelCase field names verbatim. Absent dates and
    /// unchosen identifiers serialize to empty strings.
    pub fn to_query_string(&self) -> String {
        let wire = WireQuery {
            trip_type: self.trip_type.as_str().to_string(),
            passengers: self.passengers.to_string(),
            travel_class: self.travel_class.as_str().to_string(),
            from: self.from.clone(),
            to: self.to.clone(),
            origin_sky_id: self.origin_sky_id.clone().unwrap_or_default(),
            destination_sky_id: self.destination_sky_id.clone().unwrap_or_default(),
            origin_entity_id: self.origin_entity_id.clone().unwrap_or_default(),
            destination_entity_id: self.destination_entity_id.clone().unwrap_or_default(),
            departure_date: format_date(self.departure_date),
            return_date: format_date(self.return_date),
        };

        // A struct of plain strings always encodes
        serde_urlencoded::to_string(&wire).unwrap_or_default()
    }

    /// Deserialize a query string, substituting per-field defaults for
    /// absent or empty keys.
    ///
    /// Malformed dates and non-numeric passenger counts resolve to their
    /// defaults rather than erroring; search readiness is already gated
    /// by [`QueryState::is_complete`].
    pub fn from_query_string(qs: &str) -> Self {
        let wire: WireQuery = serde_urlencoded::from_str(qs).unwrap_or_default();

        Self {
            trip_type: TripType::parse(&wire.trip_type).unwrap_or_default(),
            passengers: wire.passengers.parse().ok().filter(|&n| n >= 1).unwrap_or(1),
            travel_class: TravelClass::parse(&wire.travel_class).unwrap_or_default(),
            from: wire.from,
            to: wire.to,
            origin_sky_id: non_empty(wire.origin_sky_id),
            destination_sky_id: non_empty(wire.destination_sky_id),
            origin_entity_id: non_empty(wire.origin_entity_id),
            destination_entity_id: non_empty(wire.destination_entity_id),
            departure_date: parse_date(&wire.departure_date),
            return_date: parse_date(&wire.return_date),
        }
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn trip_type_strategy() -> impl Strategy<Value = TripType> {
        prop_oneof![Just(TripType::OneWay), Just(TripType::RoundTrip)]
    }

    fn travel_class_strategy() -> impl Strategy<Value = TravelClass> {
        prop_oneof![
            Just(TravelClass::Economy),
            Just(TravelClass::Business),
            Just(TravelClass::First),
        ]
    }

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (2024i32..2027, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn complete_state_strategy() -> impl Strategy<Value = QueryState> {
        (
            trip_type_strategy(),
            1u32..=4,
            travel_class_strategy(),
            "[A-Za-z ]{0,12}",
            "[A-Za-z ]{0,12}",
            "[A-Z]{3,4}",
            "[A-Z]{3,4}",
            "[0-9]{6,8}",
            "[0-9]{6,8}",
            date_strategy(),
            date_strategy(),
        )
            .prop_map(
                |(trip_type, passengers, travel_class, from, to, osky, dsky, oent, dent, dep, ret)| {
                    QueryState {
                        trip_type,
                        passengers,
                        travel_class,
                        from,
                        to,
                        origin_sky_id: Some(osky),
                        destination_sky_id: Some(dsky),
                        origin_entity_id: Some(oent),
                        destination_entity_id: Some(dent),
                        departure_date: Some(dep),
                        return_date: Some(ret),
                    }
                },
            )
    }

    proptest! {
        /// Round-trip law: encoding then decoding a complete state is
        /// the identity.
        #[test]
        fn codec_round_trip(state in complete_state_strategy()) {
            let qs = state.to_query_string();
            let parsed = QueryState::from_query_string(&qs);
            prop_assert_eq!(parsed, state);
        }

        /// A complete state is always reported complete, regardless of
        /// trip type.
        #[test]
        fn complete_states_are_complete(state in complete_state_strategy()) {
            prop_assert!(state.is_complete());
        }

        /// Arbitrary query strings never panic the parser.
        #[test]
        fn parser_is_total(qs in ".{0,200}") {
            let _ = QueryState::from_query_string(&qs);
        }
    }
}
