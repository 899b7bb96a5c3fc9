//! PTV Timetable API response DTOs.
//!
//! These map to the `/v3/departures` JSON response. Every field is
//! `Option` because the payload is untrusted external data: the API
//! omits fields freely, and a missing field must degrade gracefully
//! rather than fail deserialization.

use std::collections::HashMap;

use serde::Deserialize;

/// Response from `/v3/departures/route_type/{t}/stop/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeparturesResponse {
    /// Upcoming departures from the stop, in upstream order.
    pub departures: Option<Vec<Departure>>,

    /// Route metadata keyed by route id (stringified in JSON),
    /// present when `expand=route` was requested.
    pub routes: Option<HashMap<String, RouteInfo>>,

    /// Direction metadata keyed by direction id, present when
    /// `expand=direction` was requested.
    pub directions: Option<HashMap<String, DirectionInfo>>,
}

/// One scheduled or estimated vehicle movement from the stop.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Departure {
    pub route_id: Option<i64>,

    pub direction_id: Option<i64>,

    /// Timetabled departure time (ISO-8601 UTC, e.g. "2026-08-28T09:00:00Z").
    pub scheduled_departure_utc: Option<String>,

    /// Real-time estimate, when the vehicle is being tracked.
    pub estimated_departure_utc: Option<String>,

    /// Whether the vehicle is currently at the stop.
    pub at_platform: Option<bool>,
}

/// Route metadata from the `routes` expansion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteInfo {
    /// Public-facing route number (e.g. "901"). May be empty for
    /// modes that have no number.
    pub route_number: Option<String>,

    /// Full route name (e.g. "Frankston - Ringwood via Dandenong").
    pub route_name: Option<String>,
}

/// Direction metadata from the `directions` expansion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionInfo {
    /// Name of the direction of travel, usually the terminus suburb.
    pub direction_name: Option<String>,
}
