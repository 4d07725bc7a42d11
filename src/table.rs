/// The working observation table: normalization and date filtering.
///
/// Construction sorts rows newest-first; everything after that is a pure
/// projection. Filtering never mutates in place — it produces a new table,
/// mirroring the fetch → normalize → filter → present flow of the page.

use chrono::NaiveDate;

use crate::model::{Observation, Parameter};

/// A sorted, filterable collection of observations.
///
/// Invariant: rows are ordered descending by timestamp. An empty table is
/// valid; every view renders an empty state from it rather than failing.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    /// Builds a table from raw observations, sorting newest-first.
    /// Ties keep their fetch order (stable sort).
    pub fn new(mut rows: Vec<Observation>) -> Self {
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        ObservationTable { rows }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest calendar dates present, or `None` when empty.
    /// Used to default the date-range selection to the full dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        // Rows are sorted descending, so last is oldest and first is newest.
        let newest = self.rows.first()?.timestamp.date_naive();
        let oldest = self.rows.last()?.timestamp.date_naive();
        Some((oldest, newest))
    }

    /// Keeps observations whose calendar date falls in `[start, end]`,
    /// both ends inclusive. Comparison is on dates, not full timestamps.
    pub fn filter_dates(&self, start: NaiveDate, end: NaiveDate) -> ObservationTable {
        let rows = self
            .rows
            .iter()
            .filter(|obs| {
                let date = obs.timestamp.date_naive();
                date >= start && date <= end
            })
            .cloned()
            .collect();
        // Filtering preserves the descending order, no re-sort needed.
        ObservationTable { rows }
    }

    /// Distinct station ids, in order of first (i.e. most recent) appearance.
    pub fn stations(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .filter(|obs| seen.insert(obs.station.as_str()))
            .map(|obs| obs.station.as_str())
            .collect()
    }

    /// The most recent observation for each distinct station.
    /// One entry per station — this is what the map plots.
    pub fn latest_per_station(&self) -> Vec<&Observation> {
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .filter(|obs| seen.insert(obs.station.as_str()))
            .collect()
    }

    /// All observations for one station, still newest-first.
    pub fn station_rows(&self, station: &str) -> Vec<&Observation> {
        self.rows.iter().filter(|obs| obs.station == station).collect()
    }

    /// True if any row carries a tide height reading.
    pub fn has_tide_height(&self) -> bool {
        self.rows.iter().any(|obs| obs.tide_height_m.is_some())
    }

    /// True if any row carries a surge reading.
    pub fn has_surge(&self) -> bool {
        self.rows.iter().any(|obs| obs.surge_m.is_some())
    }

    /// The parameters this table can chart: the four core parameters
    /// always, tide/surge only when at least one row carries them.
    pub fn available_parameters(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|p| match p {
                Parameter::TideHeight => self.has_tide_height(),
                Parameter::Surge => self.has_surge(),
                _ => true,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};

    fn obs(station: &str, y: i32, m: u32, d: u32, h: u32) -> Observation {
        Observation {
            station: station.to_string(),
            timestamp: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
            latitude: 4.05,
            longitude: 9.68,
            air_temperature_c: 29.0,
            humidity_pct: 85.0,
            wind_speed_ms: 3.0,
            air_pressure_hpa: 1010.0,
            tide_height_m: None,
            surge_m: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rows_are_sorted_descending() {
        let table = ObservationTable::new(vec![
            obs("A", 2024, 5, 1, 6),
            obs("A", 2024, 5, 3, 12),
            obs("A", 2024, 5, 2, 9),
        ]);
        for pair in table.rows().windows(2) {
            assert!(
                pair[0].timestamp >= pair[1].timestamp,
                "adjacent rows out of order: {} before {}",
                pair[0].timestamp,
                pair[1].timestamp
            );
        }
    }

    #[test]
    fn test_date_bounds() {
        let table = ObservationTable::new(vec![
            obs("A", 2024, 5, 2, 9),
            obs("A", 2024, 4, 28, 23),
            obs("A", 2024, 5, 1, 6),
        ]);
        assert_eq!(
            table.date_bounds(),
            Some((day(2024, 4, 28), day(2024, 5, 2)))
        );
        assert_eq!(ObservationTable::default().date_bounds(), None);
    }

    #[test]
    fn test_filter_is_inclusive_on_both_ends() {
        // 5 records over 3 calendar dates; a range covering 2 of the 3
        // dates must yield exactly those rows, still sorted descending.
        let table = ObservationTable::new(vec![
            obs("A", 2024, 5, 1, 6),
            obs("A", 2024, 5, 1, 18),
            obs("B", 2024, 5, 2, 9),
            obs("B", 2024, 5, 3, 9),
            obs("A", 2024, 5, 3, 23),
        ]);
        let filtered = table.filter_dates(day(2024, 5, 2), day(2024, 5, 3));
        assert_eq!(filtered.len(), 3);
        assert!(
            filtered
                .rows()
                .iter()
                .all(|o| o.timestamp.date_naive() >= day(2024, 5, 2))
        );
        for pair in filtered.rows().windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_filter_single_day_range() {
        let table = ObservationTable::new(vec![
            obs("A", 2024, 5, 1, 6),
            obs("A", 2024, 5, 2, 6),
            obs("A", 2024, 5, 3, 6),
        ]);
        let filtered = table.filter_dates(day(2024, 5, 2), day(2024, 5, 2));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows()[0].timestamp.date_naive(), day(2024, 5, 2));
    }

    #[test]
    fn test_filter_excluding_everything_yields_empty_table() {
        let table = ObservationTable::new(vec![obs("A", 2024, 5, 1, 6)]);
        let filtered = table.filter_dates(day(2023, 1, 1), day(2023, 1, 31));
        assert!(filtered.is_empty());
        // Empty tables still answer projection queries without panicking.
        assert!(filtered.stations().is_empty());
        assert!(filtered.latest_per_station().is_empty());
        assert_eq!(filtered.date_bounds(), None);
    }

    #[test]
    fn test_stations_are_distinct_in_recency_order() {
        let table = ObservationTable::new(vec![
            obs("PORT", 2024, 5, 1, 6),
            obs("AERO", 2024, 5, 1, 12),
            obs("PORT", 2024, 5, 1, 18),
        ]);
        assert_eq!(table.stations(), vec!["PORT", "AERO"]);
    }

    #[test]
    fn test_latest_per_station_picks_newest_row() {
        let table = ObservationTable::new(vec![
            obs("PORT", 2024, 5, 1, 6),
            obs("PORT", 2024, 5, 1, 18),
            obs("AERO", 2024, 5, 1, 12),
        ]);
        let latest = table.latest_per_station();
        assert_eq!(latest.len(), 2);
        let port = latest.iter().find(|o| o.station == "PORT").unwrap();
        assert_eq!(port.timestamp.hour(), 18);
    }

    #[test]
    fn test_station_rows_filters_and_keeps_order() {
        let table = ObservationTable::new(vec![
            obs("PORT", 2024, 5, 1, 6),
            obs("AERO", 2024, 5, 1, 12),
            obs("PORT", 2024, 5, 2, 6),
        ]);
        let rows = table.station_rows("PORT");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].timestamp > rows[1].timestamp);
    }

    #[test]
    fn test_available_parameters_without_tide_columns() {
        let table = ObservationTable::new(vec![obs("AERO", 2024, 5, 1, 6)]);
        let params = table.available_parameters();
        assert_eq!(params.len(), 4);
        assert!(!params.contains(&Parameter::TideHeight));
        assert!(!params.contains(&Parameter::Surge));
    }

    #[test]
    fn test_available_parameters_with_tide_columns() {
        let mut tidal = obs("PORT", 2024, 5, 1, 6);
        tidal.tide_height_m = Some(1.4);
        tidal.surge_m = Some(0.1);
        let table = ObservationTable::new(vec![tidal, obs("AERO", 2024, 5, 1, 7)]);
        let params = table.available_parameters();
        assert_eq!(params.len(), 6);
        assert!(params.contains(&Parameter::TideHeight));
        assert!(params.contains(&Parameter::Surge));
    }
}
