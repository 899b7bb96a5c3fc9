//! Bus arrival display server.
//!
//! Reports the next buses to a single destination from one fixed
//! stop, backed by the PTV Timetable API v3.

pub mod arrivals;
pub mod cache;
pub mod config;
pub mod ptv;
pub mod web;
