//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{SecondsFormat, Utc};

use crate::arrivals::transform;

use super::dto::{ArrivalsResponse, ConfigResponse, ErrorResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/arrivals", get(arrivals))
        .route("/api/config", get(config))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next arrivals for the configured stop.
async fn arrivals(State(state): State<AppState>) -> Result<Json<ArrivalsResponse>, AppError> {
    // Gate before any cache or network access.
    state
        .config
        .require()
        .map_err(|message| AppError::Config { message })?;

    let cached = state
        .ptv
        .departures()
        .await
        .map_err(|e| AppError::Upstream {
            message: e.to_string(),
        })?;

    let now = Utc::now();
    let arrivals = transform(&cached.payload, now, &state.filter, state.config.display_tz);

    Ok(Json(ArrivalsResponse {
        stop_id: state.config.stop_id.clone(),
        arrivals,
        last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Configuration status. Served even when unconfigured, and never
/// includes credentials.
async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        stop_id: state.config.stop_id.clone(),
        configured: state.config.is_configured(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Required settings are missing; the request never left the
    /// process.
    Config { message: String },

    /// The upstream fetch or its payload failed.
    Upstream { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let message = match self {
            AppError::Config { message } => message,
            AppError::Upstream { message } => message,
        };

        tracing::error!("{message}");

        let body = Json(ErrorResponse { error: message });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
