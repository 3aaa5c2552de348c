//! Web layer: axum routes, DTOs and shared state.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
