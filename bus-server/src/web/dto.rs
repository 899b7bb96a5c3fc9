//! Response DTOs for the arrivals endpoints.

use serde::Serialize;

use crate::arrivals::Arrival;

/// Response for `GET /api/arrivals`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalsResponse {
    /// The configured stop.
    pub stop_id: String,

    /// Next arrivals, chronological, at most three.
    pub arrivals: Vec<Arrival>,

    /// When this response was assembled (ISO-8601 UTC).
    pub last_updated: String,
}

/// Response for `GET /api/config`.
///
/// Deliberately minimal: reports whether the service is configured
/// without exposing any credential.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub stop_id: String,
    pub configured: bool,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
