//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Itinerary arrived with no legs at all
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Itinerary arrived with more legs than the model supports
    #[error("itinerary has {0} legs; only outbound and inbound are supported")]
    TooManyLegs(usize),

    /// Leg arrived with no segments
    #[error("leg must have at least one segment")]
    EmptyLeg,
}
