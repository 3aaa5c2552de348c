//! Airport lookup result type.

/// An airport (or city) returned by the location lookup.
///
/// `sky_id` and `entity_id` are opaque identifiers required by the
/// downstream flight search call; they are never interpreted locally.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    /// Human-readable suggestion title, e.g. "London Heathrow (LHR)".
    pub name: String,

    /// Opaque entity identifier for the search API.
    pub entity_id: String,

    /// Opaque sky identifier for the search API.
    pub sky_id: String,
}

impl Airport {
    /// Create a new airport record.
    pub fn new(
        name: impl Into<String>,
        entity_id: impl Into<String>,
        sky_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            entity_id: entity_id.into(),
            sky_id: sky_id.into(),
        }
    }
}
