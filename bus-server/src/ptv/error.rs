//! PTV client error types.

/// Errors from the PTV Timetable API client.
#[derive(Debug, thiserror::Error)]
pub enum PtvError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("PTV API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Leading portion of the offending body, for logs.
        body: Option<String>,
    },
}
