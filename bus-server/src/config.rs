//! Process configuration.
//!
//! All settings come from the environment. The required trio
//! (`PTV_USER_ID`, `PTV_API_KEY`, `STOP_ID`) gates every arrivals
//! request, but the process starts without them so `/api/config` can
//! report the gap.

use chrono_tz::Tz;

/// Bus in the PTV `route_type` enumeration.
pub const ROUTE_TYPE_BUS: u8 = 2;

/// How many departures to request upstream. More than the board shows,
/// so filtering still leaves enough to display.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DESTINATION: &str = "Mitcham";

/// Application configuration, read once at startup.
///
/// Credentials are only ever used to derive request signatures; they
/// must not appear in logs, errors, or responses.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub user_id: String,
    pub api_key: String,
    pub stop_id: String,
    pub port: u16,
    /// Direction name the board is filtered to.
    pub destination: String,
    /// Timezone used for the human-readable arrival times. Explicit
    /// so output does not depend on the host's ambient locale.
    pub display_tz: Tz,
}

impl AppConfig {
    /// Read configuration from the environment. Missing required
    /// values yield an unconfigured (but startable) state.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).unwrap_or_default();

        Self {
            user_id: var("PTV_USER_ID"),
            api_key: var("PTV_API_KEY"),
            stop_id: var("STOP_ID"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            destination: std::env::var("DESTINATION_FILTER")
                .unwrap_or_else(|_| DEFAULT_DESTINATION.to_string()),
            display_tz: std::env::var("DISPLAY_TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Australia::Melbourne),
        }
    }

    /// True iff every required credential/identifier is present.
    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }

    /// Environment variable names of required settings that are unset.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.user_id.is_empty() {
            missing.push("PTV_USER_ID");
        }
        if self.api_key.is_empty() {
            missing.push("PTV_API_KEY");
        }
        if self.stop_id.is_empty() {
            missing.push("STOP_ID");
        }
        missing
    }

    /// Gate for request handling: errs with a message naming the
    /// missing settings. Callers must not touch the cache or the
    /// network when this fails.
    pub fn require(&self) -> Result<(), String> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Missing configuration. Please set {} in the environment",
                missing.join(", ")
            ))
        }
    }

    /// The fixed stop query this deployment serves.
    pub fn stop_query(&self) -> StopQuery {
        StopQuery {
            stop_id: self.stop_id.clone(),
            route_type: ROUTE_TYPE_BUS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// The fixed stop this deployment serves, built once at startup.
#[derive(Debug, Clone)]
pub struct StopQuery {
    pub stop_id: String,
    pub route_type: u8,
    pub max_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user_id: &str, api_key: &str, stop_id: &str) -> AppConfig {
        AppConfig {
            user_id: user_id.to_string(),
            api_key: api_key.to_string(),
            stop_id: stop_id.to_string(),
            port: DEFAULT_PORT,
            destination: DEFAULT_DESTINATION.to_string(),
            display_tz: chrono_tz::Australia::Melbourne,
        }
    }

    #[test]
    fn complete_config_passes_the_gate() {
        let config = config("123", "key", "2171");
        assert!(config.is_configured());
        assert!(config.require().is_ok());
    }

    #[test]
    fn missing_settings_are_named() {
        let config = config("", "key", "");
        assert!(!config.is_configured());
        assert_eq!(config.missing(), vec!["PTV_USER_ID", "STOP_ID"]);

        let message = config.require().unwrap_err();
        assert!(message.contains("PTV_USER_ID"));
        assert!(message.contains("STOP_ID"));
        assert!(!message.contains("PTV_API_KEY"));
    }

    #[test]
    fn gate_never_leaks_credentials() {
        let config = config("", "very-secret-key", "");
        let message = config.require().unwrap_err();
        assert!(!message.contains("very-secret-key"));
    }

    #[test]
    fn stop_query_is_fixed_to_bus() {
        let query = config("123", "key", "2171").stop_query();
        assert_eq!(query.stop_id, "2171");
        assert_eq!(query.route_type, ROUTE_TYPE_BUS);
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);
    }
}
