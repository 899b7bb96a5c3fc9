//! Application state for the web layer.

use std::sync::Arc;

use crate::arrivals::DestinationFilter;
use crate::cache::CachedPtvClient;
use crate::config::AppConfig;

/// Shared application state.
///
/// Contains everything the handlers need; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration (credentials stay inside; handlers only
    /// expose the stop id and the configured flag).
    pub config: Arc<AppConfig>,

    /// Cached PTV departures client.
    pub ptv: Arc<CachedPtvClient>,

    /// The destination the board is filtered to.
    pub filter: Arc<DestinationFilter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: AppConfig, ptv: CachedPtvClient) -> Self {
        let filter = DestinationFilter::new(config.destination.clone());
        Self {
            config: Arc::new(config),
            ptv: Arc::new(ptv),
            filter: Arc::new(filter),
        }
    }
}
