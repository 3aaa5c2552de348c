//! Conversion from wire DTOs to domain types.
//!
//! Conversion is lenient at the list level and strict at the record
//! level: a malformed itinerary (no legs, a leg without segments, an
//! unparsable timestamp) is logged and skipped, never allowed to abort
//! the rest of the list.

use chrono::{DateTime, NaiveDateTime};
use tracing::warn;

use crate::domain::{
    Airport, Carrier, DomainError, Itinerary, Leg, Place, Segment, SegmentCarrier,
};

use super::types::{AirportDto, ItineraryDto, LegDto, PlaceDto, SegmentDto};

/// Why a single record could not be converted.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("unparsable timestamp: {0:?}")]
    BadTimestamp(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Convert airport suggestions, dropping records without both opaque ids.
pub fn convert_airports(dtos: Vec<AirportDto>) -> Vec<Airport> {
    dtos.into_iter()
        .filter_map(|dto| match convert_airport(dto) {
            Ok(airport) => Some(airport),
            Err(e) => {
                warn!("skipping airport suggestion: {e}");
                None
            }
        })
        .collect()
}

fn convert_airport(dto: AirportDto) -> Result<Airport, ConvertError> {
    let sky_id = dto.sky_id.ok_or(ConvertError::MissingField("skyId"))?;
    let entity_id = dto.entity_id.ok_or(ConvertError::MissingField("entityId"))?;

    // Prefer the full suggestion line, fall back to the bare title
    let name = dto
        .presentation
        .and_then(|p| p.suggestion_title.or(p.title))
        .ok_or(ConvertError::MissingField("presentation"))?;

    Ok(Airport::new(name, entity_id, sky_id))
}

/// Convert a raw itinerary list, skipping itineraries that fail.
pub fn convert_itineraries(dtos: Vec<ItineraryDto>) -> Vec<Itinerary> {
    dtos.into_iter()
        .filter_map(|dto| {
            let id = dto.id.clone().unwrap_or_default();
            match convert_itinerary(dto) {
                Ok(itinerary) => Some(itinerary),
                Err(e) => {
                    warn!("skipping unrenderable itinerary {id:?}: {e}");
                    None
                }
            }
        })
        .collect()
}

fn convert_itinerary(dto: ItineraryDto) -> Result<Itinerary, ConvertError> {
    let id = dto.id.ok_or(ConvertError::MissingField("id"))?;

    let legs = dto
        .legs
        .unwrap_or_default()
        .into_iter()
        .map(convert_leg)
        .collect::<Result<Vec<_>, _>>()?;

    let price = dto
        .price
        .and_then(|p| p.formatted)
        .ok_or(ConvertError::MissingField("price.formatted"))?;

    let eco_contender_delta = dto.eco.and_then(|e| e.eco_contender_delta);

    Ok(Itinerary::new(id, legs, price, eco_contender_delta)?)
}

fn convert_leg(dto: LegDto) -> Result<Leg, ConvertError> {
    let departure = parse_timestamp(dto.departure.as_deref())?;
    let arrival = parse_timestamp(dto.arrival.as_deref())?;

    let duration_in_minutes = dto
        .duration_in_minutes
        .ok_or(ConvertError::MissingField("durationInMinutes"))?;

    let origin = convert_place(dto.origin)?;
    let destination = convert_place(dto.destination)?;

    let marketing_carriers = dto
        .carriers
        .and_then(|c| c.marketing)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| {
            c.name.map(|name| Carrier {
                name,
                logo_url: c.logo_url,
            })
        })
        .collect();

    let segments = dto
        .segments
        .unwrap_or_default()
        .into_iter()
        .map(convert_segment)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(claimed) = dto.stop_count {
        if claimed != segments.len() as i64 - 1 {
            warn!("wire stopCount {claimed} disagrees with {} segments", segments.len());
        }
    }

    Ok(Leg::new(
        departure,
        arrival,
        duration_in_minutes,
        origin,
        destination,
        marketing_carriers,
        segments,
        dto.time_delta_in_days,
    )?)
}

fn convert_segment(dto: SegmentDto) -> Result<Segment, ConvertError> {
    let carrier = dto
        .marketing_carrier
        .ok_or(ConvertError::MissingField("marketingCarrier"))?;

    Ok(Segment {
        id: dto.id.ok_or(ConvertError::MissingField("segment.id"))?,
        departure: parse_timestamp(dto.departure.as_deref())?,
        arrival: parse_timestamp(dto.arrival.as_deref())?,
        origin: convert_place(dto.origin)?,
        destination: convert_place(dto.destination)?,
        duration_in_minutes: dto
            .duration_in_minutes
            .ok_or(ConvertError::MissingField("durationInMinutes"))?,
        marketing_carrier: SegmentCarrier {
            name: carrier.name.unwrap_or_default(),
            code: carrier.alternate_id.unwrap_or_default(),
        },
        flight_number: dto.flight_number.unwrap_or_default(),
    })
}

fn convert_place(dto: Option<PlaceDto>) -> Result<Place, ConvertError> {
    let dto = dto.ok_or(ConvertError::MissingField("origin/destination"))?;
    let display_code = dto
        .display_code
        .ok_or(ConvertError::MissingField("displayCode"))?;
    Ok(Place {
        name: dto.name.unwrap_or_default(),
        display_code,
    })
}

/// Parse a wire timestamp into a wall-clock time.
///
/// The API sends times local to the airport without an offset
/// ("2024-02-20T09:40:00"); offset forms are accepted and reduced to
/// their wall-clock component.
fn parse_timestamp(s: Option<&str>) -> Result<NaiveDateTime, ConvertError> {
    let s = s.ok_or(ConvertError::MissingField("departure/arrival"))?;

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_local()))
        .map_err(|_| ConvertError::BadTimestamp(s.to_string()))
}
