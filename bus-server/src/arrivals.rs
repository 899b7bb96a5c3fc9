//! Turning raw departures into the arrival board.
//!
//! The transformer filters out past and off-destination departures,
//! resolves human-readable labels from the route/direction expansions,
//! computes minute-accurate countdowns and delays, and bounds the
//! result to the next few arrivals in chronological order.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::ptv::{Departure, DeparturesResponse};

/// Maximum number of arrivals shown on the board.
pub const MAX_ARRIVALS: usize = 3;

/// The single destination the board displays.
///
/// Departures are matched by exact direction name; everything else
/// passing the stop is dropped. Held as a named value so swapping the
/// destination never touches transformer logic.
#[derive(Debug, Clone)]
pub struct DestinationFilter {
    name: String,
}

impl DestinationFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn matches(&self, destination: &str) -> bool {
        destination == self.name
    }
}

/// One upcoming arrival, ready for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    /// Route number where the route has one, else route name, else a
    /// generic "Route {id}" label.
    pub route_label: String,

    /// Direction-of-travel name, e.g. the terminus suburb.
    pub destination: String,

    /// Effective arrival time (estimated when available, otherwise
    /// scheduled), ISO-8601 UTC.
    pub arrival_time_utc: String,

    /// Local 12-hour clock rendering of the arrival time.
    pub arrival_time_formatted: String,

    /// Whole minutes until arrival. Zero for anything under half a
    /// minute away; never negative.
    pub minutes_until: i64,

    /// Estimated minus scheduled, in whole minutes. Negative means
    /// running early; zero when no estimate exists.
    pub delay_minutes: i64,

    /// Whether the vehicle is already at the stop.
    pub at_platform: bool,
}

/// Transform a raw departures payload into the next arrivals for one
/// destination, sorted by arrival time and bounded to [`MAX_ARRIVALS`].
///
/// Malformed departures (missing or unparsable timestamps, unknown
/// ids) are skipped individually; they never fail the whole payload.
pub fn transform(
    payload: &DeparturesResponse,
    now: DateTime<Utc>,
    filter: &DestinationFilter,
    tz: Tz,
) -> Vec<Arrival> {
    let departures = payload.departures.as_deref().unwrap_or_default();

    let mut arrivals: Vec<(DateTime<Utc>, Arrival)> = departures
        .iter()
        .filter_map(|departure| build_arrival(payload, departure, now, filter, tz))
        .collect();

    // Chronological order, not countdown order: two departures can
    // round to the same minutes_until.
    arrivals.sort_by_key(|(time, _)| *time);
    arrivals.truncate(MAX_ARRIVALS);

    arrivals.into_iter().map(|(_, arrival)| arrival).collect()
}

fn build_arrival(
    payload: &DeparturesResponse,
    departure: &Departure,
    now: DateTime<Utc>,
    filter: &DestinationFilter,
    tz: Tz,
) -> Option<(DateTime<Utc>, Arrival)> {
    let scheduled = departure
        .scheduled_departure_utc
        .as_deref()
        .and_then(parse_utc);
    let estimated = departure
        .estimated_departure_utc
        .as_deref()
        .and_then(parse_utc);

    let arrival_time = estimated.or(scheduled)?;

    // Raw timestamp comparison: a bus due in under half a minute still
    // rounds to 0 minutes but must not be dropped as past.
    if arrival_time < now {
        return None;
    }

    let destination = resolve_destination(payload, departure.direction_id);
    if !filter.matches(&destination) {
        return None;
    }

    let delay_minutes = match (scheduled, estimated) {
        (Some(scheduled), Some(estimated)) => round_minutes(estimated - scheduled),
        _ => 0,
    };

    let arrival = Arrival {
        route_label: resolve_route_label(payload, departure.route_id),
        destination,
        arrival_time_utc: arrival_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        arrival_time_formatted: format_local_time(arrival_time, tz),
        minutes_until: round_minutes(arrival_time - now),
        delay_minutes,
        at_platform: departure.at_platform.unwrap_or(false),
    };

    Some((arrival_time, arrival))
}

fn parse_utc(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Round a duration to whole minutes, half away from zero.
fn round_minutes(delta: chrono::Duration) -> i64 {
    (delta.num_milliseconds() as f64 / 60_000.0).round() as i64
}

/// Prefer the short route number, fall back to the route name, then
/// to a generic label. Empty strings count as absent.
fn resolve_route_label(payload: &DeparturesResponse, route_id: Option<i64>) -> String {
    let Some(id) = route_id else {
        return "Route ?".to_string();
    };

    payload
        .routes
        .as_ref()
        .and_then(|routes| routes.get(&id.to_string()))
        .and_then(|route| {
            route
                .route_number
                .as_deref()
                .filter(|label| !label.is_empty())
                .or_else(|| {
                    route
                        .route_name
                        .as_deref()
                        .filter(|label| !label.is_empty())
                })
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("Route {id}"))
}

fn resolve_destination(payload: &DeparturesResponse, direction_id: Option<i64>) -> String {
    direction_id
        .and_then(|id| {
            payload
                .directions
                .as_ref()?
                .get(&id.to_string())?
                .direction_name
                .clone()
        })
        .unwrap_or_default()
}

/// Local 12-hour clock time, e.g. "08:41 am".
fn format_local_time(time: DateTime<Utc>, tz: Tz) -> String {
    time.with_timezone(&tz).format("%I:%M %P").to_string()
}
