//! Sky-Scrapper API error types.

/// Errors that can occur when talking to the Sky-Scrapper API.
#[derive(Debug, thiserror::Error)]
pub enum SkyError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check RAPIDAPI_KEY")]
    Unauthorized,

    /// Too many requests against the RapidAPI quota
    #[error("rate limited by the API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A flight search was attempted with an incomplete query.
    /// Callers gate on `QueryState::is_complete`; this is the backstop.
    #[error("flight search requires a complete query")]
    IncompleteQuery,
}
