//! Display summaries derived from itineraries.

use serde::Serialize;

use crate::domain::{Itinerary, Leg, Segment};

use super::format::{format_clock_time, layover_duration, render_duration};

/// Flat display record for one itinerary result row.
///
/// Every field is fully formatted; consumers render it directly with no
/// further business logic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItinerarySummary {
    pub id: String,

    /// Outbound departure time, "HH:MM".
    pub departure_time: String,

    /// Outbound arrival time, "HH:MM".
    pub arrival_time: String,

    /// Arrival day offset for the "+N" superscript, absent when the
    /// leg lands on its departure day.
    pub day_offset: Option<i64>,

    /// Primary carrier name; empty when the leg carried no carriers.
    pub carrier_name: String,

    /// Primary carrier logo URL; empty when unknown.
    pub carrier_logo_url: String,

    /// Total outbound duration, "H hrs M min".
    pub duration: String,

    pub origin_code: String,
    pub destination_code: String,

    /// Stop count with its label, e.g. "1 stop" or "2 stops".
    pub stops: String,

    /// Layover summary: "Direct flight" or "·"-joined layover entries.
    pub layovers: String,

    /// CO2 delta, e.g. "13 kg CO2e"; empty when eco data is absent.
    pub eco: String,

    /// Pre-formatted price string, passed through.
    pub price: String,

    /// Per-segment expansion for the detail view.
    pub segments: Vec<SegmentDetail>,
}

/// One segment row in the expanded detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDetail {
    /// "HH:MM" departure time.
    pub departure_time: String,

    /// "Name (CODE)" of the origin airport.
    pub departure_place: String,

    pub arrival_time: String,
    pub arrival_place: String,

    /// "Travel time: H hrs M min" without the prefix, e.g. "2 hrs 5 min".
    pub travel_time: String,

    pub carrier_name: String,

    /// Carrier code plus flight number, e.g. "QR 920".
    pub flight: String,

    /// Layover after this segment, e.g. "2 hrs 30 min layover Dubai (DXB)".
    /// Absent for the final segment of the leg.
    pub layover_after: Option<String>,
}

/// "stop" for exactly one stop, "stops" otherwise (including zero).
pub fn stop_label(stop_count: usize) -> &'static str {
    if stop_count == 1 { "stop" } else { "stops" }
}

/// Summarize the layovers of a leg.
///
/// Direct legs yield the literal "Direct flight". Multi-segment legs
/// yield, in strict segment order, one entry per layover: the formatted
/// gap followed by the next segment's origin display code, joined with
/// " · ".
pub fn layover_summary(leg: &Leg) -> String {
    let segments = leg.segments();
    if segments.len() <= 1 {
        return "Direct flight".to_string();
    }

    segments
        .windows(2)
        .map(|pair| {
            let (hours, mins) = layover_duration(pair[0].arrival, pair[1].departure);
            format!("{hours} hrs {mins} min {}", pair[1].origin.display_code)
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Derive the flat display record for one itinerary.
///
/// The outbound leg is always the summary leg. Missing optional data
/// (eco, day offset, carrier) substitutes the empty/absent form rather
/// than failing.
pub fn summarize(itinerary: &Itinerary) -> ItinerarySummary {
    let leg = itinerary.outbound();

    let (carrier_name, carrier_logo_url) = match leg.primary_carrier() {
        Some(c) => (c.name.clone(), c.logo_url.clone().unwrap_or_default()),
        None => (String::new(), String::new()),
    };

    let eco = itinerary
        .eco_contender_delta
        .map(|delta| format!("{delta:.0} kg CO2e"))
        .unwrap_or_default();

    let segments = leg
        .segments()
        .iter()
        .enumerate()
        .map(|(i, s)| segment_detail(s, leg.segments().get(i + 1)))
        .collect();

    ItinerarySummary {
        id: itinerary.id.clone(),
        departure_time: format_clock_time(leg.departure),
        arrival_time: format_clock_time(leg.arrival),
        day_offset: leg.time_delta_in_days,
        carrier_name,
        carrier_logo_url,
        duration: render_duration(leg.duration_in_minutes),
        origin_code: leg.origin.display_code.clone(),
        destination_code: leg.destination.display_code.clone(),
        stops: format!("{} {}", leg.stop_count(), stop_label(leg.stop_count())),
        layovers: layover_summary(leg),
        eco,
        price: itinerary.price.clone(),
        segments,
    }
}

/// Summarize a whole result list.
pub fn summarize_all(itineraries: &[Itinerary]) -> Vec<ItinerarySummary> {
    itineraries.iter().map(summarize).collect()
}

fn segment_detail(segment: &Segment, next: Option<&Segment>) -> SegmentDetail {
    let layover_after = next.map(|n| {
        let (hours, mins) = layover_duration(segment.arrival, n.departure);
        format!(
            "{hours} hrs {mins} min layover {} ({})",
            n.origin.name, n.origin.display_code
        )
    });

    SegmentDetail {
        departure_time: format_clock_time(segment.departure),
        departure_place: format!("{} ({})", segment.origin.name, segment.origin.display_code),
        arrival_time: format_clock_time(segment.arrival),
        arrival_place: format!(
            "{} ({})",
            segment.destination.name, segment.destination.display_code
        ),
        travel_time: render_duration(segment.duration_in_minutes),
        carrier_name: segment.marketing_carrier.name.clone(),
        flight: format!("{} {}", segment.marketing_carrier.code, segment.flight_number),
        layover_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Carrier, Place, SegmentCarrier};
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn segment(id: &str, dep: &str, arr: &str, from: (&str, &str), to: (&str, &str)) -> Segment {
        let departure = ts(dep);
        let arrival = ts(arr);
        Segment {
            id: id.into(),
            departure,
            arrival,
            origin: Place::new(from.0, from.1),
            destination: Place::new(to.0, to.1),
            duration_in_minutes: arrival.signed_duration_since(departure).num_minutes(),
            marketing_carrier: SegmentCarrier {
                name: "Qatar Airways".into(),
                code: "QR".into(),
            },
            flight_number: "920".into(),
        }
    }

    fn leg(segments: Vec<Segment>, time_delta_in_days: Option<i64>) -> Leg {
        let departure = segments.first().unwrap().departure;
        let arrival = segments.last().unwrap().arrival;
        let duration = arrival.signed_duration_since(departure).num_minutes();
        Leg::new(
            departure,
            arrival,
            duration,
            segments.first().unwrap().origin.clone(),
            segments.last().unwrap().destination.clone(),
            vec![Carrier {
                name: "Qatar Airways".into(),
                logo_url: Some("https://logos.example/qr.png".into()),
            }],
            segments,
            time_delta_in_days,
        )
        .unwrap()
    }

    fn direct_itinerary() -> Itinerary {
        let leg = leg(
            vec![segment(
                "s1",
                "2024-02-20T08:00:00",
                "2024-02-20T10:05:00",
                ("Hamad International", "DOH"),
                ("Dubai International", "DXB"),
            )],
            None,
        );
        Itinerary::new("it-1", vec![leg], "$431", None).unwrap()
    }

    fn three_segment_itinerary() -> Itinerary {
        let leg = leg(
            vec![
                segment(
                    "s1",
                    "2024-02-20T08:00:00",
                    "2024-02-20T10:00:00",
                    ("Hamad International", "DOH"),
                    ("Dubai International", "DXB"),
                ),
                segment(
                    "s2",
                    "2024-02-20T12:30:00",
                    "2024-02-20T16:00:00",
                    ("Dubai International", "DXB"),
                    ("Istanbul", "IST"),
                ),
                segment(
                    "s3",
                    "2024-02-20T17:15:00",
                    "2024-02-20T21:00:00",
                    ("Istanbul", "IST"),
                    ("Heathrow", "LHR"),
                ),
            ],
            Some(1),
        );
        Itinerary::new("it-3", vec![leg], "$612", Some(12.7)).unwrap()
    }

    #[test]
    fn stop_label_exact_match_on_one() {
        assert_eq!(stop_label(0), "stops");
        assert_eq!(stop_label(1), "stop");
        assert_eq!(stop_label(2), "stops");
        assert_eq!(stop_label(7), "stops");
    }

    #[test]
    fn direct_leg_has_direct_flight_summary() {
        let it = direct_itinerary();
        assert_eq!(layover_summary(it.outbound()), "Direct flight");
    }

    #[test]
    fn three_segments_yield_two_layover_entries_in_order() {
        let it = three_segment_itinerary();
        let summary = layover_summary(it.outbound());
        // DXB layover 10:00 -> 12:30 = 2h30, IST layover 16:00 -> 17:15 = 1h15
        assert_eq!(summary, "2 hrs 30 min DXB · 1 hrs 15 min IST");
    }

    #[test]
    fn summarize_direct_flight() {
        let s = summarize(&direct_itinerary());
        assert_eq!(s.id, "it-1");
        assert_eq!(s.departure_time, "08:00");
        assert_eq!(s.arrival_time, "10:05");
        assert_eq!(s.day_offset, None);
        assert_eq!(s.carrier_name, "Qatar Airways");
        assert_eq!(s.duration, "2 hrs 5 min");
        assert_eq!(s.origin_code, "DOH");
        assert_eq!(s.destination_code, "DXB");
        assert_eq!(s.stops, "0 stops");
        assert_eq!(s.layovers, "Direct flight");
        assert_eq!(s.eco, "");
        assert_eq!(s.price, "$431");
        assert_eq!(s.segments.len(), 1);
    }

    #[test]
    fn summarize_rounds_eco_to_zero_decimals() {
        let s = summarize(&three_segment_itinerary());
        assert_eq!(s.eco, "13 kg CO2e");
    }

    #[test]
    fn summarize_carries_day_offset() {
        let s = summarize(&three_segment_itinerary());
        assert_eq!(s.day_offset, Some(1));
    }

    #[test]
    fn summarize_one_stop_label() {
        let leg = leg(
            vec![
                segment(
                    "s1",
                    "2024-02-20T08:00:00",
                    "2024-02-20T10:00:00",
                    ("Hamad International", "DOH"),
                    ("Dubai International", "DXB"),
                ),
                segment(
                    "s2",
                    "2024-02-20T12:30:00",
                    "2024-02-20T16:00:00",
                    ("Dubai International", "DXB"),
                    ("Heathrow", "LHR"),
                ),
            ],
            None,
        );
        let it = Itinerary::new("it-2", vec![leg], "$500", None).unwrap();
        assert_eq!(summarize(&it).stops, "1 stop");
    }

    #[test]
    fn segment_details_include_layovers_except_last() {
        let s = summarize(&three_segment_itinerary());
        assert_eq!(s.segments.len(), 3);

        assert_eq!(
            s.segments[0].layover_after.as_deref(),
            Some("2 hrs 30 min layover Dubai International (DXB)")
        );
        assert_eq!(
            s.segments[1].layover_after.as_deref(),
            Some("1 hrs 15 min layover Istanbul (IST)")
        );
        assert!(s.segments[2].layover_after.is_none());

        assert_eq!(s.segments[0].departure_place, "Hamad International (DOH)");
        assert_eq!(s.segments[0].travel_time, "2 hrs 0 min");
        assert_eq!(s.segments[0].flight, "QR 920");
    }

    #[test]
    fn summarize_all_preserves_order() {
        let list = vec![direct_itinerary(), three_segment_itinerary()];
        let summaries = summarize_all(&list);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "it-1");
        assert_eq!(summaries[1].id, "it-3");
    }

    #[test]
    fn missing_carrier_yields_empty_strings() {
        let mut leg = leg(
            vec![segment(
                "s1",
                "2024-02-20T08:00:00",
                "2024-02-20T10:05:00",
                ("Hamad International", "DOH"),
                ("Dubai International", "DXB"),
            )],
            None,
        );
        leg.marketing_carriers.clear();
        let it = Itinerary::new("it-nc", vec![leg], "$100", None).unwrap();
        let s = summarize(&it);
        assert_eq!(s.carrier_name, "");
        assert_eq!(s.carrier_logo_url, "");
    }
}
