//! Itinerary, leg and segment types.
//!
//! An `Itinerary` is one priced, bookable combination of legs. A `Leg`
//! is a directional journey (outbound or inbound) made of one or more
//! `Segment`s, each a single physical flight. All values are sourced
//! verbatim from the external search API and never mutated afterwards.

use chrono::NaiveDateTime;

use super::DomainError;

/// A segment endpoint: airport name plus display code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Human-readable name, e.g. "Hamad International". May be empty
    /// for leg endpoints, which only carry a display code upstream.
    pub name: String,

    /// Short display code, e.g. "DOH".
    pub display_code: String,
}

impl Place {
    /// Create a place with a name and display code.
    pub fn new(name: impl Into<String>, display_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_code: display_code.into(),
        }
    }

    /// Create a place known only by its display code.
    pub fn code_only(display_code: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            display_code: display_code.into(),
        }
    }
}

/// A marketing carrier on a leg. The first carrier in a leg's list is
/// the primary one shown in the summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    pub name: String,
    pub logo_url: Option<String>,
}

/// The marketing carrier of a single segment, with its airline code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentCarrier {
    pub name: String,
    /// Airline code used with the flight number, e.g. "QR".
    pub code: String,
}

/// One physical flight between two airports.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: String,
    /// Departure wall-clock time, local to the origin airport.
    pub departure: NaiveDateTime,
    /// Arrival wall-clock time, local to the destination airport.
    pub arrival: NaiveDateTime,
    pub origin: Place,
    pub destination: Place,
    pub duration_in_minutes: i64,
    pub marketing_carrier: SegmentCarrier,
    pub flight_number: String,
}

/// A directional journey composed of one or more segments.
///
/// # Invariants
///
/// - `segments` is non-empty
/// - `stop_count == segments.len() - 1`
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_in_minutes: i64,
    stop_count: usize,
    pub origin: Place,
    pub destination: Place,
    /// Ordered marketing carriers; the first is the primary carrier.
    pub marketing_carriers: Vec<Carrier>,
    segments: Vec<Segment>,
    /// Arrival day offset relative to the departure day, for the
    /// "+1" superscript. Absent when arrival is on the same day.
    pub time_delta_in_days: Option<i64>,
}

impl Leg {
    /// Construct a leg, validating that at least one segment exists.
    ///
    /// The stop count is always derived from the segment list rather
    /// than trusted from upstream data.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        duration_in_minutes: i64,
        origin: Place,
        destination: Place,
        marketing_carriers: Vec<Carrier>,
        segments: Vec<Segment>,
        time_delta_in_days: Option<i64>,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyLeg);
        }

        let stop_count = segments.len() - 1;

        Ok(Leg {
            departure,
            arrival,
            duration_in_minutes,
            stop_count,
            origin,
            destination,
            marketing_carriers,
            segments,
            time_delta_in_days,
        })
    }

    /// Number of stops (segments minus one).
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// The ordered segments of this leg.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if this leg is a single direct flight.
    pub fn is_direct(&self) -> bool {
        self.stop_count == 0
    }

    /// The primary marketing carrier, if any carrier was supplied.
    pub fn primary_carrier(&self) -> Option<&Carrier> {
        self.marketing_carriers.first()
    }
}

/// One priced, bookable combination of legs.
///
/// Holds one leg (one-way) or two legs (outbound and inbound).
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub id: String,
    legs: Vec<Leg>,
    /// Pre-formatted price string, e.g. "$431". Currency conversion and
    /// re-formatting are out of scope; the string is passed through.
    pub price: String,
    /// Estimated CO2 delta versus a typical flight on the route, in kg.
    pub eco_contender_delta: Option<f64>,
}

impl Itinerary {
    /// Construct an itinerary, validating the leg count.
    pub fn new(
        id: impl Into<String>,
        legs: Vec<Leg>,
        price: impl Into<String>,
        eco_contender_delta: Option<f64>,
    ) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        if legs.len() > 2 {
            return Err(DomainError::TooManyLegs(legs.len()));
        }

        Ok(Itinerary {
            id: id.into(),
            legs,
            price: price.into(),
            eco_contender_delta,
        })
    }

    /// All legs, outbound first.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// The outbound leg. This is the leg summarized in result rows.
    pub fn outbound(&self) -> &Leg {
        // Safe: validated non-empty at construction
        &self.legs[0]
    }

    /// The inbound leg of a round trip, if present.
    pub fn inbound(&self) -> Option<&Leg> {
        self.legs.get(1)
    }
}
