//! Time and duration formatting.

use chrono::NaiveDateTime;

/// Render a timestamp as "HH:MM" in 24-hour form.
///
/// Timestamps are wall-clock times local to the airport they belong to,
/// so no zone conversion happens here; repeated calls on the same input
/// always produce the same output.
pub fn format_clock_time(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// Decompose a minute count into whole hours and leftover minutes.
///
/// Plain integer division/remainder. Negative inputs pass through with
/// truncating division; see [`layover_duration`] for why they can occur.
pub fn format_duration(minutes: i64) -> (i64, i64) {
    (minutes / 60, minutes % 60)
}

/// Render a minute count as "H hrs M min".
///
/// Zero-hour durations still print "0 hrs".
pub fn render_duration(minutes: i64) -> String {
    let (hours, mins) = format_duration(minutes);
    format!("{hours} hrs {mins} min")
}

/// The wall-clock gap between a segment's arrival and the next
/// segment's departure, as (hours, minutes).
///
/// Overlapping or malformed data can make the gap non-positive; the
/// value passes through arithmetically unguarded rather than being
/// clamped or rejected, mirroring the raw data.
pub fn layover_duration(arrival: NaiveDateTime, next_departure: NaiveDateTime) -> (i64, i64) {
    let gap = next_departure.signed_duration_since(arrival).num_minutes();
    format_duration(gap)
}
