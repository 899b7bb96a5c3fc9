//! PTV Timetable API v3 client.
//!
//! This module provides an HTTP client for Public Transport Victoria's
//! Timetable API, which serves real-time departure information.
//!
//! Key characteristics of the API:
//! - Every request carries a `devid` query parameter and an HMAC-SHA1
//!   `signature` of the request path, keyed by the developer's API key
//! - Timestamps are ISO-8601 UTC
//! - `expand=route` / `expand=direction` inline the metadata needed to
//!   label departures, avoiding separate lookups

mod client;
mod error;
pub mod signing;
mod types;

pub use client::{PtvClient, PtvConfig};
pub use error::PtvError;
pub use types::{Departure, DeparturesResponse, DirectionInfo, RouteInfo};
