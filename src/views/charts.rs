/// Chart view models: single-station trend and cross-station comparison.
///
/// Series points are emitted oldest-first (plotting order), the reverse
/// of the table's newest-first order. Rows missing the selected optional
/// parameter are skipped rather than plotted as gaps.

use chrono::{DateTime, Utc};

use crate::model::Parameter;
use crate::table::ObservationTable;

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// One (time, value) sample in a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Line chart of one parameter at one station over the filtered range.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub station: String,
    pub parameter: Parameter,
    pub title: String,
    /// Chronologically ascending.
    pub points: Vec<SeriesPoint>,
}

/// One station's line within a comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSeries {
    pub station: String,
    /// Chronologically ascending.
    pub points: Vec<SeriesPoint>,
}

/// All stations overlaid for a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub parameter: Parameter,
    pub title: String,
    pub series: Vec<StationSeries>,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn series_for(table: &ObservationTable, station: &str, parameter: Parameter) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = table
        .station_rows(station)
        .into_iter()
        .filter_map(|obs| {
            parameter.value_of(obs).map(|value| SeriesPoint {
                timestamp: obs.timestamp,
                value,
            })
        })
        .collect();
    points.reverse(); // table order is newest-first, charts plot oldest-first
    points
}

/// Builds the trend chart for one station and parameter.
///
/// A station with no rows in the filtered range, or a parameter the
/// station never reports, yields an empty point list — the chart frame
/// still renders with its title.
pub fn trend(table: &ObservationTable, station: &str, parameter: Parameter) -> TrendChart {
    TrendChart {
        station: station.to_string(),
        parameter,
        title: format!("{} at {}", parameter.label(), station),
        points: series_for(table, station, parameter),
    }
}

/// Builds the comparison chart set: one chart per available parameter,
/// one series per distinct station. Stations with no values for a
/// parameter are left out of that chart.
pub fn comparison(table: &ObservationTable) -> Vec<ComparisonChart> {
    let stations = table.stations();
    table
        .available_parameters()
        .into_iter()
        .map(|parameter| {
            let series = stations
                .iter()
                .map(|station| StationSeries {
                    station: station.to_string(),
                    points: series_for(table, station, parameter),
                })
                .filter(|s| !s.points.is_empty())
                .collect();
            ComparisonChart {
                parameter,
                title: format!("Station comparison — {}", parameter.label()),
                series,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Observation;
    use chrono::TimeZone;

    fn obs(station: &str, hour: u32, temp: f64, tide: Option<f64>) -> Observation {
        Observation {
            station: station.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
            latitude: 4.05,
            longitude: 9.68,
            air_temperature_c: temp,
            humidity_pct: 85.0,
            wind_speed_ms: 3.0,
            air_pressure_hpa: 1010.0,
            tide_height_m: tide,
            surge_m: None,
        }
    }

    #[test]
    fn test_trend_points_are_ascending_in_time() {
        let table = ObservationTable::new(vec![
            obs("PORT", 6, 27.0, None),
            obs("PORT", 18, 30.0, None),
            obs("PORT", 12, 29.0, None),
        ]);
        let chart = trend(&table, "PORT", Parameter::AirTemperature);
        assert_eq!(chart.points.len(), 3);
        for pair in chart.points.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
        assert_eq!(chart.points[0].value, 27.0);
        assert_eq!(chart.title, "AIR TEMPERATURE at PORT");
    }

    #[test]
    fn test_trend_only_includes_selected_station() {
        let table = ObservationTable::new(vec![
            obs("PORT", 6, 27.0, None),
            obs("AERO", 7, 31.0, None),
        ]);
        let chart = trend(&table, "PORT", Parameter::AirTemperature);
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].value, 27.0);
    }

    #[test]
    fn test_trend_skips_rows_missing_optional_parameter() {
        let table = ObservationTable::new(vec![
            obs("PORT", 6, 27.0, Some(1.2)),
            obs("PORT", 12, 29.0, None),
            obs("PORT", 18, 30.0, Some(1.6)),
        ]);
        let chart = trend(&table, "PORT", Parameter::TideHeight);
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].value, 1.2);
        assert_eq!(chart.points[1].value, 1.6);
    }

    #[test]
    fn test_trend_for_unknown_station_is_empty_not_error() {
        let table = ObservationTable::new(vec![obs("PORT", 6, 27.0, None)]);
        let chart = trend(&table, "NOWHERE", Parameter::AirTemperature);
        assert!(chart.points.is_empty());
    }

    #[test]
    fn test_comparison_has_one_chart_per_available_parameter() {
        // No tide/surge data → only the four core parameters get charts.
        let table = ObservationTable::new(vec![
            obs("PORT", 6, 27.0, None),
            obs("AERO", 7, 31.0, None),
        ]);
        let charts = comparison(&table);
        assert_eq!(charts.len(), 4);
        assert!(charts.iter().all(|c| c.series.len() == 2));
    }

    #[test]
    fn test_comparison_includes_tide_chart_when_data_present() {
        let table = ObservationTable::new(vec![
            obs("PORT", 6, 27.0, Some(1.2)),
            obs("AERO", 7, 31.0, None),
        ]);
        let charts = comparison(&table);
        let tide_chart = charts
            .iter()
            .find(|c| c.parameter == Parameter::TideHeight)
            .expect("tide chart should exist when any row has tide data");
        // Only the gauge station contributes a tide series.
        assert_eq!(tide_chart.series.len(), 1);
        assert_eq!(tide_chart.series[0].station, "PORT");
    }

    #[test]
    fn test_comparison_of_empty_table_is_core_charts_with_no_series() {
        let charts = comparison(&ObservationTable::default());
        assert_eq!(charts.len(), 4);
        assert!(charts.iter().all(|c| c.series.is_empty()));
    }
}
