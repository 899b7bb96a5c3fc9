//! PTV Timetable API HTTP client.
//!
//! Performs the signed departures request and maps transport, status,
//! and parse failures to [`PtvError`].

use crate::config::StopQuery;

use super::error::PtvError;
use super::signing::signed_url;
use super::types::DeparturesResponse;

/// Default base URL for the PTV Timetable API.
const DEFAULT_BASE_URL: &str = "https://timetableapi.ptv.vic.gov.au";

/// Default request timeout in seconds. The upstream API has no SLA;
/// a hung request must not stall the arrival board indefinitely.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the PTV client.
#[derive(Debug, Clone)]
pub struct PtvConfig {
    /// Registered developer id, sent as the `devid` query parameter.
    pub user_id: String,
    /// API key used to sign requests. Never sent directly.
    pub api_key: String,
    /// Base URL for the API (defaults to production PTV).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl PtvConfig {
    /// Create a new config with the given credentials.
    pub fn new(user_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// PTV Timetable API client.
#[derive(Debug, Clone)]
pub struct PtvClient {
    http: reqwest::Client,
    config: PtvConfig,
}

impl PtvClient {
    /// Create a new PTV client with the given configuration.
    pub fn new(config: PtvConfig) -> Result<Self, PtvError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch the raw departures payload for a stop.
    ///
    /// Requests route and direction expansions so the transformer can
    /// resolve labels without further calls.
    pub async fn departures(&self, query: &StopQuery) -> Result<DeparturesResponse, PtvError> {
        let path = format!(
            "/v3/departures/route_type/{}/stop/{}?max_results={}&expand=route&expand=direction",
            query.route_type, query.stop_id, query.max_results
        );
        let url = signed_url(
            &self.config.base_url,
            &path,
            &self.config.user_id,
            &self.config.api_key,
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PtvError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PtvError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    use super::*;

    fn query() -> StopQuery {
        StopQuery {
            stop_id: "2171".to_string(),
            route_type: 2,
            max_results: 5,
        }
    }

    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn config_builder() {
        let config = PtvConfig::new("123", "key")
            .with_base_url("http://localhost:8080")
            .with_timeout(3);

        assert_eq!(config.user_id, "123");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn config_defaults() {
        let config = PtvConfig::new("123", "key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[tokio::test]
    async fn fetches_and_parses_departures() {
        let app = Router::new().route(
            "/v3/departures/route_type/:route_type/stop/:stop_id",
            get(|| async {
                Json(serde_json::json!({
                    "departures": [{"route_id": 15, "direction_id": 1,
                        "scheduled_departure_utc": "2026-08-28T09:00:00Z"}],
                    "routes": {"15": {"route_number": "901"}},
                    "directions": {"1": {"direction_name": "Mitcham"}}
                }))
            }),
        );
        let base = spawn_upstream(app).await;

        let client = PtvClient::new(PtvConfig::new("123", "key").with_base_url(base)).unwrap();
        let payload = client.departures(&query()).await.unwrap();

        assert_eq!(payload.departures.unwrap().len(), 1);
        assert!(payload.routes.unwrap().contains_key("15"));
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let app = Router::new().route(
            "/v3/departures/route_type/:route_type/stop/:stop_id",
            get(|| async { (StatusCode::FORBIDDEN, "invalid signature") }),
        );
        let base = spawn_upstream(app).await;

        let client = PtvClient::new(PtvConfig::new("123", "key").with_base_url(base)).unwrap();
        let err = client.departures(&query()).await.unwrap_err();

        // The handler surfaces upstream errors by message; the status
        // code must be visible there.
        assert!(err.to_string().contains("403"));

        match err {
            PtvError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "invalid signature");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparsable_body_is_json_error() {
        let app = Router::new().route(
            "/v3/departures/route_type/:route_type/stop/:stop_id",
            get(|| async { "<html>not json</html>" }),
        );
        let base = spawn_upstream(app).await;

        let client = PtvClient::new(PtvConfig::new("123", "key").with_base_url(base)).unwrap();
        let err = client.departures(&query()).await.unwrap_err();

        match err {
            PtvError::Json { body, .. } => {
                assert_eq!(body.as_deref(), Some("<html>not json</html>"));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }
}
