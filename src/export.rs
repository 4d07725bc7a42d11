/// CSV export of the filtered observation table.
///
/// Pure format conversion: the header row matches the table's column set
/// (tide/surge columns appear only when the data carries them), values are
/// written as-is, output is UTF-8. The caller offers the bytes as a
/// downloadable artifact or writes them to disk.

use crate::model::{DashboardError, Parameter};
use crate::table::ObservationTable;

/// Suggested file name for the downloaded artifact.
pub const EXPORT_FILE_NAME: &str = "meteo_douala.csv";

/// Timestamp format used in the exported `DateTime` column.
const EXPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column headers for a table, in export order. Tide/surge columns are
/// included only when present somewhere in the data.
pub fn export_columns(table: &ObservationTable) -> Vec<&'static str> {
    let mut columns = vec![
        "DateTime",
        "Station",
        "Latitude",
        "Longitude",
        Parameter::AirTemperature.label(),
        Parameter::Humidity.label(),
        Parameter::WindSpeed.label(),
        Parameter::AirPressure.label(),
    ];
    if table.has_tide_height() {
        columns.push(Parameter::TideHeight.label());
    }
    if table.has_surge() {
        columns.push(Parameter::Surge.label());
    }
    columns
}

fn format_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Serializes the table to UTF-8 CSV bytes, header row first.
///
/// An empty table exports as a header-only file. Rows from stations
/// without a tide gauge leave the optional columns blank.
pub fn to_csv(table: &ObservationTable) -> Result<Vec<u8>, DashboardError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let with_tide = table.has_tide_height();
    let with_surge = table.has_surge();

    writer.write_record(export_columns(table))?;

    for obs in table.rows() {
        let mut record = vec![
            obs.timestamp.format(EXPORT_DATETIME_FORMAT).to_string(),
            obs.station.clone(),
            obs.latitude.to_string(),
            obs.longitude.to_string(),
            obs.air_temperature_c.to_string(),
            obs.humidity_pct.to_string(),
            obs.wind_speed_ms.to_string(),
            obs.air_pressure_hpa.to_string(),
        ];
        if with_tide {
            record.push(format_opt(obs.tide_height_m));
        }
        if with_surge {
            record.push(format_opt(obs.surge_m));
        }
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| DashboardError::Export(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
