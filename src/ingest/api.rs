/// Observation API client.
///
/// Retrieves station observations from the real-time data service as a
/// JSON array of flat records and converts them into `model::Observation`s.
///
/// One GET per page load, capped by a `limit` query parameter. No retries,
/// no caching, no pagination — the dashboard refetches on every render.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::model::{DashboardError, Observation};

/// Default base URL of the observation service.
pub const DEFAULT_BASE_URL: &str = "https://data-real-time-2.onrender.com";

/// Default cap on rows returned per fetch.
pub const DEFAULT_ROW_LIMIT: u32 = 5000;

// ============================================================================
// Wire format
// ============================================================================

/// One record as the API sends it. Column names are uppercase with spaces;
/// numeric values sometimes arrive as strings, so every numeric field goes
/// through a tolerant deserializer.
#[derive(Debug, Deserialize)]
pub struct RawObservation {
    #[serde(rename = "DateTime")]
    pub datetime: String,
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Latitude", deserialize_with = "num_from_any")]
    pub latitude: f64,
    #[serde(rename = "Longitude", deserialize_with = "num_from_any")]
    pub longitude: f64,
    #[serde(rename = "AIR TEMPERATURE", deserialize_with = "num_from_any")]
    pub air_temperature: f64,
    #[serde(rename = "HUMIDITY", deserialize_with = "num_from_any")]
    pub humidity: f64,
    #[serde(rename = "WIND SPEED", deserialize_with = "num_from_any")]
    pub wind_speed: f64,
    #[serde(rename = "AIR PRESSURE", deserialize_with = "num_from_any")]
    pub air_pressure: f64,
    #[serde(rename = "TIDE HEIGHT", default, deserialize_with = "opt_num_from_any")]
    pub tide_height: Option<f64>,
    #[serde(rename = "SURGE", default, deserialize_with = "opt_num_from_any")]
    pub surge: Option<f64>,
}

/// Accepts a JSON number or a numeric string.
fn num_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(v) => Ok(v),
        NumOrStr::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("not a number: '{}'", s))),
    }
}

/// Like `num_from_any`, but treats null/empty strings as absent.
fn opt_num_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeNum {
        Null,
        Num(f64),
        Str(String),
    }

    match MaybeNum::deserialize(deserializer)? {
        MaybeNum::Null => Ok(None),
        MaybeNum::Num(v) => Ok(Some(v)),
        MaybeNum::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
                Ok(None)
            } else {
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("not a number: '{}'", s)))
            }
        }
    }
}

// ============================================================================
// Timestamp parsing
// ============================================================================

/// Parses the API's `DateTime` column.
///
/// The service has emitted both RFC 3339 strings and the plain
/// `YYYY-MM-DD HH:MM:SS` form; naive timestamps are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DashboardError> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    Err(DashboardError::Parse(format!(
        "unrecognized DateTime value: '{}'",
        raw
    )))
}

// ============================================================================
// Parsing and fetching
// ============================================================================

/// Builds the observation URL with its row-limit query parameter.
pub fn build_observations_url(base_url: &str, limit: u32) -> String {
    format!("{}/donnees?limit={}", base_url.trim_end_matches('/'), limit)
}

/// Parses a response body into observations.
///
/// The body must be a JSON array of flat records; anything else is a
/// `Parse` error, including a record whose timestamp cannot be read.
pub fn parse_observations(body: &str) -> Result<Vec<Observation>, DashboardError> {
    let raw: Vec<RawObservation> = serde_json::from_str(body)
        .map_err(|e| DashboardError::Parse(format!("expected JSON array of records: {}", e)))?;

    raw.into_iter()
        .map(|r| {
            let timestamp = parse_timestamp(&r.datetime)?;
            Ok(Observation {
                station: r.station,
                timestamp,
                latitude: r.latitude,
                longitude: r.longitude,
                air_temperature_c: r.air_temperature,
                humidity_pct: r.humidity,
                wind_speed_ms: r.wind_speed,
                air_pressure_hpa: r.air_pressure,
                tide_height_m: r.tide_height,
                surge_m: r.surge,
            })
        })
        .collect()
}

/// Fetches observations from the API.
///
/// `timeout_secs` must match the timeout the `client` was built with;
/// it is only used to report timeout expiry in the error. A zero-row
/// response is valid and yields an empty vector — empty-state handling
/// belongs to the views, not the fetcher.
pub fn fetch_observations(
    client: &reqwest::blocking::Client,
    base_url: &str,
    limit: u32,
    timeout_secs: u64,
) -> Result<Vec<Observation>, DashboardError> {
    let url = build_observations_url(base_url, limit);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| classify_request_error(e, timeout_secs))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DashboardError::Http(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| classify_request_error(e, timeout_secs))?;

    parse_observations(&body)
}

fn classify_request_error(e: reqwest::Error, timeout_secs: u64) -> DashboardError {
    if e.is_timeout() {
        DashboardError::Timeout(timeout_secs)
    } else {
        DashboardError::Transport(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
