/// Core data types for the Douala coastal weather dashboard.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types and error conversions.

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// A single timestamped reading from one monitoring station.
///
/// Corresponds to one entry in the JSON array returned by the observation
/// API. Observations are immutable once fetched; filtering and sorting
/// happen on `table::ObservationTable`, never in place here.
///
/// Tide height and storm surge are reported only by tide-gauge stations.
/// Their absence is part of the schema, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station: String,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// Air temperature in °C.
    pub air_temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
    /// Wind speed in m/s.
    pub wind_speed_ms: f64,
    /// Air pressure in hPa.
    pub air_pressure_hpa: f64,
    /// Tide height in meters, tide-gauge stations only.
    pub tide_height_m: Option<f64>,
    /// Storm surge anomaly in meters, tide-gauge stations only.
    pub surge_m: Option<f64>,
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// A plottable observation parameter.
///
/// The first four are reported by every station; `TideHeight` and `Surge`
/// only by tide-gauge stations, so chart views must check availability
/// via `table::ObservationTable::available_parameters` before offering them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    AirTemperature,
    Humidity,
    WindSpeed,
    AirPressure,
    TideHeight,
    Surge,
}

impl Parameter {
    /// Every parameter, in display order.
    pub const ALL: [Parameter; 6] = [
        Parameter::AirTemperature,
        Parameter::Humidity,
        Parameter::WindSpeed,
        Parameter::AirPressure,
        Parameter::TideHeight,
        Parameter::Surge,
    ];

    /// Wire/display name, matching the remote API's column headers.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::AirTemperature => "AIR TEMPERATURE",
            Parameter::Humidity => "HUMIDITY",
            Parameter::WindSpeed => "WIND SPEED",
            Parameter::AirPressure => "AIR PRESSURE",
            Parameter::TideHeight => "TIDE HEIGHT",
            Parameter::Surge => "SURGE",
        }
    }

    /// Measurement unit for axis labels and popups.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::AirTemperature => "°C",
            Parameter::Humidity => "%",
            Parameter::WindSpeed => "m/s",
            Parameter::AirPressure => "hPa",
            Parameter::TideHeight => "m",
            Parameter::Surge => "m",
        }
    }

    /// True for parameters only some stations report.
    pub fn is_optional(&self) -> bool {
        matches!(self, Parameter::TideHeight | Parameter::Surge)
    }

    /// Extracts this parameter's value from an observation.
    /// `None` only for optional parameters the record does not carry.
    pub fn value_of(&self, obs: &Observation) -> Option<f64> {
        match self {
            Parameter::AirTemperature => Some(obs.air_temperature_c),
            Parameter::Humidity => Some(obs.humidity_pct),
            Parameter::WindSpeed => Some(obs.wind_speed_ms),
            Parameter::AirPressure => Some(obs.air_pressure_hpa),
            Parameter::TideHeight => obs.tide_height_m,
            Parameter::Surge => obs.surge_m,
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or processing observation data.
///
/// Missing optional columns and empty filtered tables are NOT errors;
/// views render empty states for those instead.
#[derive(Debug, PartialEq)]
pub enum DashboardError {
    /// Non-2xx HTTP response from the observation API.
    Http(u16),
    /// Network-level failure (DNS, connect, TLS, read).
    Transport(String),
    /// The request exceeded the configured timeout, in seconds.
    Timeout(u64),
    /// The response body could not be deserialized as an observation array.
    Parse(String),
    /// Configuration file could not be read or parsed.
    Config(String),
    /// CSV serialization failed.
    Export(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Http(code) => write!(f, "HTTP error: {}", code),
            DashboardError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DashboardError::Timeout(secs) => {
                write!(f, "Request timed out after {} seconds", secs)
            }
            DashboardError::Parse(msg) => write!(f, "Parse error: {}", msg),
            DashboardError::Config(msg) => write!(f, "Config error: {}", msg),
            DashboardError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<csv::Error> for DashboardError {
    fn from(e: csv::Error) -> Self {
        DashboardError::Export(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
