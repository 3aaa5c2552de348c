//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::presenter::{ITEMS_PER_PAGE, paginate, summarize_all};
use crate::query::QueryState;
use crate::sky::SkyError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/airports/search", get(search_airports))
        .route("/api/flights/search", get(search_flights))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up airports by free-text query.
///
/// Lookup failures degrade to an empty suggestion list; the detail is
/// logged for diagnostics only.
async fn search_airports(
    State(state): State<AppState>,
    Query(req): Query<AirportSearchRequest>,
) -> Json<AirportSearchResponse> {
    let airports = match state.sky.search_airports(&req.q).await {
        Ok(airports) => airports,
        Err(e) => {
            warn!("airport lookup failed for {:?}: {e}", req.q);
            Vec::new()
        }
    };

    let airports = airports.iter().map(AirportResult::from_airport).collect();
    Json(AirportSearchResponse { airports })
}

/// Search flights and return one page of display-ready summaries.
///
/// The whole QueryState travels in the URL query string, so a results
/// view can be opened directly from a link. Incomplete queries are
/// rejected before any network call. Fetch failures surface as "no
/// results", with the failure detail logged.
async fn search_flights(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<FlightSearchResults>, AppError> {
    let raw = raw.unwrap_or_default();
    let query = QueryState::from_query_string(&raw);

    if !query.is_complete() {
        return Err(AppError::BadRequest {
            message: "incomplete search: choose origin, destination and dates first".to_string(),
        });
    }

    let page = serde_urlencoded::from_str::<PageRequest>(&raw)
        .unwrap_or_default()
        .page
        .unwrap_or(0);

    let itineraries = match state.sky.search_flights(&query).await {
        Ok(itineraries) => itineraries,
        Err(SkyError::IncompleteQuery) => {
            // Unreachable given the gate above; keep the 400 mapping
            return Err(AppError::BadRequest {
                message: "incomplete search: choose origin, destination and dates first"
                    .to_string(),
            });
        }
        Err(e) => {
            warn!("flight search failed: {e}");
            Vec::new()
        }
    };

    let summaries = summarize_all(&itineraries);
    let total = summaries.len();
    let window = paginate(&summaries, page, ITEMS_PER_PAGE).to_vec();

    Ok(Json(FlightSearchResults {
        itineraries: window,
        page,
        total_pages: total.div_ceil(ITEMS_PER_PAGE),
        total,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SkyError> for AppError {
    fn from(e: SkyError) -> Self {
        match e {
            SkyError::IncompleteQuery => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
