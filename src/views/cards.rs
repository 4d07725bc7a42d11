/// Recent-observations view: the top-N table rows and the per-station
/// summary cards shown beside them.
///
/// A pure projection — derived icons and markers are computed here so
/// the renderer only has to print them.

use chrono::{DateTime, Utc};

use crate::alert::icons::{self, HumidityMarker, WeatherIcon};
use crate::model::Observation;
use crate::table::ObservationTable;

/// How many summary cards to show (the newest rows, as on the original page).
pub const CARD_COUNT: usize = 3;

/// Default number of rows in the recent-observations table.
pub const DEFAULT_ROW_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// One row of the recent-observations table, with derived display state.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow {
    pub timestamp: DateTime<Utc>,
    pub station: String,
    pub air_temperature_c: f64,
    pub icon: WeatherIcon,
    pub humidity_pct: f64,
    pub humidity_marker: HumidityMarker,
    pub wind_speed_ms: f64,
    pub air_pressure_hpa: f64,
    pub tide_height_m: Option<f64>,
    pub surge_m: Option<f64>,
}

/// A summary card for one recent observation.
#[derive(Debug, Clone, PartialEq)]
pub struct StationCard {
    pub station: String,
    pub timestamp: DateTime<Utc>,
    pub air_temperature_c: f64,
    pub icon: WeatherIcon,
    pub humidity_pct: f64,
    pub humidity_marker: HumidityMarker,
    pub wind_speed_ms: f64,
    pub air_pressure_hpa: f64,
    pub tide_height_m: Option<f64>,
    pub surge_m: Option<f64>,
}

impl StationCard {
    /// Text lines for a terminal or markdown rendering of the card.
    /// Tide and surge lines appear only when the record carries them.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Station {}", self.station),
            format!(
                "Temperature: {:.1} °C {}",
                self.air_temperature_c,
                self.icon.symbol()
            ),
            format!(
                "Humidity: {:.0} % {}",
                self.humidity_pct,
                self.humidity_marker.symbol()
            ),
            format!("Wind: {:.1} m/s", self.wind_speed_ms),
            format!("Pressure: {:.1} hPa", self.air_pressure_hpa),
        ];
        if let Some(tide) = self.tide_height_m {
            lines.push(format!("Tide: {:.2} m", tide));
        }
        if let Some(surge) = self.surge_m {
            lines.push(format!("Surge: {:.2} m", surge));
        }
        lines
    }
}

/// The assembled recent-observations view. Empty when the table is empty.
#[derive(Debug, Clone, Default)]
pub struct CardsView {
    /// Top-N rows of the filtered table, newest first.
    pub recent: Vec<ObservationRow>,
    /// Summary cards for the newest `CARD_COUNT` observations.
    pub cards: Vec<StationCard>,
    /// Whether the tide/surge columns should be shown in the table header.
    pub show_tide_height: bool,
    pub show_surge: bool,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn row_from(obs: &Observation) -> ObservationRow {
    ObservationRow {
        timestamp: obs.timestamp,
        station: obs.station.clone(),
        air_temperature_c: obs.air_temperature_c,
        icon: icons::weather_icon(obs.air_temperature_c),
        humidity_pct: obs.humidity_pct,
        humidity_marker: icons::humidity_marker(obs.humidity_pct),
        wind_speed_ms: obs.wind_speed_ms,
        air_pressure_hpa: obs.air_pressure_hpa,
        tide_height_m: obs.tide_height_m,
        surge_m: obs.surge_m,
    }
}

fn card_from(obs: &Observation) -> StationCard {
    StationCard {
        station: obs.station.clone(),
        timestamp: obs.timestamp,
        air_temperature_c: obs.air_temperature_c,
        icon: icons::weather_icon(obs.air_temperature_c),
        humidity_pct: obs.humidity_pct,
        humidity_marker: icons::humidity_marker(obs.humidity_pct),
        wind_speed_ms: obs.wind_speed_ms,
        air_pressure_hpa: obs.air_pressure_hpa,
        tide_height_m: obs.tide_height_m,
        surge_m: obs.surge_m,
    }
}

/// Builds the view from the filtered table. `row_count` caps the table
/// portion; cards always take the newest `CARD_COUNT` rows.
pub fn render(table: &ObservationTable, row_count: usize) -> CardsView {
    CardsView {
        recent: table.rows().iter().take(row_count).map(row_from).collect(),
        cards: table.rows().iter().take(CARD_COUNT).map(card_from).collect(),
        show_tide_height: table.has_tide_height(),
        show_surge: table.has_surge(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn obs(station: &str, hour: u32, temp: f64, humidity: f64) -> Observation {
        Observation {
            station: station.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
            latitude: 4.05,
            longitude: 9.68,
            air_temperature_c: temp,
            humidity_pct: humidity,
            wind_speed_ms: 3.0,
            air_pressure_hpa: 1010.0,
            tide_height_m: None,
            surge_m: None,
        }
    }

    #[test]
    fn test_render_caps_rows_and_cards() {
        let rows: Vec<_> = (0..6).map(|h| obs("PORT", h, 29.0, 85.0)).collect();
        let view = render(&ObservationTable::new(rows), 4);
        assert_eq!(view.recent.len(), 4);
        assert_eq!(view.cards.len(), CARD_COUNT);
        // Newest first.
        assert!(view.recent[0].timestamp > view.recent[1].timestamp);
    }

    #[test]
    fn test_rows_carry_derived_icons() {
        let table = ObservationTable::new(vec![obs("PORT", 12, 33.0, 99.0)]);
        let view = render(&table, 10);
        assert_eq!(view.recent[0].icon, WeatherIcon::Hot);
        assert_eq!(view.recent[0].humidity_marker, HumidityMarker::Alert);
    }

    #[test]
    fn test_card_lines_omit_missing_tide_fields() {
        // A station without a tide gauge must still render, minus the lines.
        let table = ObservationTable::new(vec![obs("AERO", 12, 29.0, 85.0)]);
        let view = render(&table, 10);
        let lines = view.cards[0].summary_lines();
        assert!(lines.iter().any(|l| l.contains("Temperature")));
        assert!(!lines.iter().any(|l| l.contains("Tide")));
        assert!(!lines.iter().any(|l| l.contains("Surge")));
        assert!(!view.show_tide_height);
        assert!(!view.show_surge);
    }

    #[test]
    fn test_card_lines_include_tide_fields_when_present() {
        let mut tidal = obs("PORT", 12, 29.0, 85.0);
        tidal.tide_height_m = Some(1.42);
        tidal.surge_m = Some(0.08);
        let view = render(&ObservationTable::new(vec![tidal]), 10);
        let lines = view.cards[0].summary_lines();
        assert!(lines.iter().any(|l| l.contains("Tide: 1.42 m")));
        assert!(lines.iter().any(|l| l.contains("Surge: 0.08 m")));
        assert!(view.show_tide_height);
        assert!(view.show_surge);
    }

    #[test]
    fn test_empty_table_renders_empty_view() {
        let view = render(&ObservationTable::default(), 10);
        assert!(view.recent.is_empty());
        assert!(view.cards.is_empty());
    }
}
