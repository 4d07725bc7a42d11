/// Page assembly: the whole dashboard as one pure function.
///
/// The original page re-runs top to bottom on every interaction; here that
/// re-run is `assemble(observations, selections)` — no mutable state
/// survives between calls beyond the fetched observations the caller holds
/// for the lifetime of the page load.

use chrono::NaiveDate;

use crate::export;
use crate::model::{Observation, Parameter};
use crate::table::ObservationTable;
use crate::views::{cards, charts, map};

// ---------------------------------------------------------------------------
// Selections
// ---------------------------------------------------------------------------

/// User-controlled widget state. Every field is optional; unset fields
/// resolve against the data at assembly time.
#[derive(Debug, Clone)]
pub struct Selections {
    /// Inclusive date range; defaults to the data's full date bounds.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Station for the trend chart; defaults to the most recently
    /// reporting station.
    pub station: Option<String>,
    /// Parameter for the trend chart; defaults to air temperature.
    pub parameter: Option<Parameter>,
    /// Rows in the recent-observations table.
    pub card_rows: usize,
}

impl Default for Selections {
    fn default() -> Self {
        Selections {
            date_range: None,
            station: None,
            parameter: None,
            card_rows: cards::DEFAULT_ROW_COUNT,
        }
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Everything a renderer needs to draw the page.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    /// The filtered table backing all views and the export.
    pub table: ObservationTable,
    pub cards: cards::CardsView,
    pub map: map::MapView,
    /// `None` only when the filtered table has no stations at all.
    pub trend: Option<charts::TrendChart>,
    pub comparison: Vec<charts::ComparisonChart>,
    /// Suggested file name for the CSV download.
    pub export_file_name: &'static str,
}

/// Assembles the full page from raw observations and selections.
///
/// An empty observation set, or a date range excluding every row, yields
/// a page of empty-state views — never an error or a panic.
pub fn assemble(observations: Vec<Observation>, selections: &Selections) -> DashboardPage {
    let full = ObservationTable::new(observations);

    let table = match selections.date_range.or(full.date_bounds()) {
        Some((start, end)) => full.filter_dates(start, end),
        None => full, // no data at all; keep the empty table
    };

    let trend = selections
        .station
        .clone()
        .or_else(|| table.stations().first().map(|s| s.to_string()))
        .map(|station| {
            let parameter = selections.parameter.unwrap_or(Parameter::AirTemperature);
            charts::trend(&table, &station, parameter)
        });

    DashboardPage {
        cards: cards::render(&table, selections.card_rows),
        map: map::render(&table),
        trend,
        comparison: charts::comparison(&table),
        export_file_name: export::EXPORT_FILE_NAME,
        table,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
