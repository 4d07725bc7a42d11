/// Station map view: one marker per distinct station with a popup
/// summarizing its latest readings, plus the animated wind-map embed URL.
///
/// The marker set comes from the filtered table (newest reading per
/// station); the registry only contributes display names for tooltips.

use crate::model::Observation;
use crate::stations;
use crate::table::ObservationTable;

/// Map center over the Wouri estuary, matching the original dashboard.
pub const MAP_CENTER: (f64, f64) = (4.05, 9.68);

/// Default zoom for the station map.
pub const MAP_ZOOM: u8 = 10;

/// Zoom for the embedded animated wind map.
pub const WIND_EMBED_ZOOM: u8 = 9;

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// One map marker, placed at the station's reported coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMarker {
    pub station: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Hover text: the station's display name.
    pub tooltip: String,
    /// Popup body: current readings, one per line.
    pub popup: String,
}

/// The assembled map view.
#[derive(Debug, Clone)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<StationMarker>,
    /// Iframe URL for the animated wind overlay, rendered verbatim.
    pub wind_embed_url: String,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn popup_text(obs: &Observation) -> String {
    let mut popup = format!(
        "{}\nTemp: {:.1} °C\nWind: {:.1} m/s\nHumidity: {:.0} %",
        obs.station, obs.air_temperature_c, obs.wind_speed_ms, obs.humidity_pct
    );
    if let Some(tide) = obs.tide_height_m {
        popup.push_str(&format!("\nTide: {:.2} m", tide));
    }
    if let Some(surge) = obs.surge_m {
        popup.push_str(&format!("\nSurge: {:.2} m", surge));
    }
    popup
}

/// The fixed wind-map embed URL, parameterized by center and zoom.
pub fn wind_embed_url(lat: f64, lon: f64, zoom: u8) -> String {
    format!(
        "https://embed.windy.com/embed2.html?lat={lat}&lon={lon}&detailLat={lat}&detailLon={lon}&zoom={zoom}&type=wind"
    )
}

/// Builds the map view: one marker per distinct station, using that
/// station's most recent observation in the filtered table. An empty
/// table yields a map with no markers, not an error.
pub fn render(table: &ObservationTable) -> MapView {
    let markers = table
        .latest_per_station()
        .into_iter()
        .map(|obs| StationMarker {
            station: obs.station.clone(),
            latitude: obs.latitude,
            longitude: obs.longitude,
            tooltip: stations::display_name(&obs.station).to_string(),
            popup: popup_text(obs),
        })
        .collect();

    MapView {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        markers,
        wind_embed_url: wind_embed_url(MAP_CENTER.0, MAP_CENTER.1, WIND_EMBED_ZOOM),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
