/// Dashboard configuration.
///
/// Loaded from a TOML file with full defaults, so a missing config file
/// runs the dashboard against the public API unchanged. The API base URL
/// can additionally be overridden through the `METDASH_API_URL`
/// environment variable (or a `.env` file via dotenv), which is how
/// development instances point at a local data service.

use serde::Deserialize;

use crate::ingest::api::{DEFAULT_BASE_URL, DEFAULT_ROW_LIMIT};
use crate::model::DashboardError;
use crate::views::cards::DEFAULT_ROW_COUNT;

/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "METDASH_API_URL";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Base URL of the observation service.
    pub api_base_url: String,
    /// Row cap passed as the `limit` query parameter.
    pub row_limit: u32,
    /// HTTP timeout in seconds. The fetch never hangs past this.
    pub http_timeout_secs: u64,
    /// Rows shown in the recent-observations table.
    pub card_rows: usize,
    /// Minimum log level name: debug, info, warn, error.
    pub log_level: String,
    /// Optional log file path; console-only when unset.
    pub log_file: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            row_limit: DEFAULT_ROW_LIMIT,
            http_timeout_secs: 15,
            card_rows: DEFAULT_ROW_COUNT,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from a TOML file, then applies the environment
    /// override for the API URL. A missing file yields the defaults; an
    /// unreadable or malformed file is a `Config` error — silently
    /// ignoring a broken config would mask pointing at the wrong API.
    pub fn load(path: &str) -> Result<DashboardConfig, DashboardError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text)
                .map_err(|e| DashboardError::Config(format!("{}: {}", path, e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DashboardConfig::default(),
            Err(e) => return Err(DashboardError::Config(format!("{}: {}", path, e))),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }

        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_api() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.row_limit, 5000);
        assert_eq!(config.card_rows, 10);
        assert!(config.http_timeout_secs > 0, "a zero timeout would hang forever");
    }

    #[test]
    fn test_partial_toml_keeps_defaults_for_the_rest() {
        let config: DashboardConfig =
            toml::from_str("row_limit = 100\nlog_level = \"debug\"").expect("should parse");
        assert_eq!(config.row_limit, 100);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        // Catches typos like `row_limt` instead of silently using defaults.
        let result: Result<DashboardConfig, _> = toml::from_str("row_limt = 100");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config =
            DashboardConfig::load("/nonexistent/metdash.toml").expect("missing file is fine");
        assert_eq!(config.row_limit, DashboardConfig::default().row_limit);
    }
}
