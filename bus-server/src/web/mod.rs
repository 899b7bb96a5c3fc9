//! Web layer for the arrival board.
//!
//! Provides the `/api/arrivals` and `/api/config` endpoints.

mod dto;
mod routes;
mod state;

pub use dto::{ArrivalsResponse, ConfigResponse, ErrorResponse};
pub use routes::{AppError, create_router};
pub use state::AppState;
