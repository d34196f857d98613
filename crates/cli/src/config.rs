//! Environment-derived CLI configuration.

use pickup_api::DEFAULT_BASE_URL;

/// Backend origin, e.g. `https://pickup.example.com`.
pub const BASE_URL_VAR: &str = "PICKUP_API_BASE_URL";
/// `json` for machine-readable logs; anything else for human-readable logs.
pub const LOG_FORMAT_VAR: &str = "PICKUP_LOG_FORMAT";
/// Standard OpenTelemetry collector endpoint; tracing export is off when unset.
pub const OTLP_ENDPOINT_VAR: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub base_url: String,
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

impl CliConfig {
    /// Reads the process environment. Call after `dotenvy::dotenv()` so a
    /// local `.env` file is honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let log_format = match non_empty(LOG_FORMAT_VAR) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            base_url: non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            log_format,
            otlp_endpoint: non_empty(OTLP_ENDPOINT_VAR),
        }
    }
}
