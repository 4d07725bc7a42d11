/// Icon and alert-marker mapping.
///
/// Pure deterministic functions from readings to display categories.
/// No I/O, no state — two equal inputs always map to the same output,
/// which is what makes the card view a pure projection of the table.

// ---------------------------------------------------------------------------
// Temperature icon
// ---------------------------------------------------------------------------

/// Descriptive icon category for an air temperature reading.
///
/// Thresholds (°C), ascending:
///   t < 20.0        → Cool
///   20.0 ≤ t < 27.0 → Mild
///   27.0 ≤ t < 32.0 → Warm
///   32.0 ≤ t        → Hot
///
/// Tuned for Douala's tropical coastal climate, where anything under
/// 20 °C usually means heavy rain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Cool,
    Mild,
    Warm,
    Hot,
}

impl WeatherIcon {
    /// Display symbol for cards and popups.
    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Cool => "🌧️",
            WeatherIcon::Mild => "⛅",
            WeatherIcon::Warm => "🌤️",
            WeatherIcon::Hot => "☀️",
        }
    }
}

/// Maps an air temperature in °C to its icon category.
pub fn weather_icon(temp_c: f64) -> WeatherIcon {
    if temp_c < 20.0 {
        WeatherIcon::Cool
    } else if temp_c < 27.0 {
        WeatherIcon::Mild
    } else if temp_c < 32.0 {
        WeatherIcon::Warm
    } else {
        WeatherIcon::Hot
    }
}

// ---------------------------------------------------------------------------
// Humidity marker
// ---------------------------------------------------------------------------

/// Marker shown next to a humidity reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityMarker {
    /// Humidity above 98% — saturation, fog or active rainfall likely.
    Alert,
    Normal,
}

impl HumidityMarker {
    pub fn symbol(&self) -> &'static str {
        match self {
            HumidityMarker::Alert => "🔴",
            HumidityMarker::Normal => "💧",
        }
    }
}

/// Alert iff humidity is strictly greater than 98.0%.
pub fn humidity_marker(humidity_pct: f64) -> HumidityMarker {
    if humidity_pct > 98.0 {
        HumidityMarker::Alert
    } else {
        HumidityMarker::Normal
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
