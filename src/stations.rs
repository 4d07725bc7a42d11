/// Station registry for the Douala coastal monitoring network.
///
/// Defines the canonical list of monitoring stations the dashboard knows
/// about, along with their metadata. Observation records remain the
/// authoritative source for coordinates and readings; the registry supplies
/// descriptive names for map tooltips and the tide-gauge hint that decides
/// whether tide/surge features are expected for a station.

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitoring station.
pub struct Station {
    /// Station identifier as it appears in the API's `Station` column.
    pub id: &'static str,
    /// Human-readable station name.
    pub name: &'static str,
    /// Where the station sits and what it is good for.
    pub description: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Whether the station is fitted with a tide gauge.
    /// Only tide-gauge stations report TIDE HEIGHT and SURGE.
    pub has_tide_gauge: bool,
}

/// All known Douala-area stations, ordered roughly seaward to inland.
pub static STATION_REGISTRY: &[Station] = &[
    Station {
        id: "DLA-PORT",
        name: "Port de Douala",
        description: "Tide-gauge station on the main quay of the autonomous \
                      port. Primary reference for tide height and storm surge \
                      in the Wouri estuary.",
        latitude: 4.0483,
        longitude: 9.6841,
        has_tide_gauge: true,
    },
    Station {
        id: "MANOKA",
        name: "Île de Manoka",
        description: "Island station at the mouth of the estuary. Sees open \
                      marine conditions first; surge readings here lead the \
                      port by one to two hours.",
        latitude: 3.8561,
        longitude: 9.6103,
        has_tide_gauge: true,
    },
    Station {
        id: "BONABERI",
        name: "Bonabéri",
        description: "West-bank station near the Wouri bridge. Meteorological \
                      readings only; no tide gauge fitted.",
        latitude: 4.0711,
        longitude: 9.6614,
        has_tide_gauge: false,
    },
    Station {
        id: "DLA-AERO",
        name: "Aéroport de Douala",
        description: "Inland reference station on the airport grounds. \
                      Useful as a non-coastal control for wind and pressure.",
        latitude: 4.0061,
        longitude: 9.7195,
        has_tide_gauge: false,
    },
    Station {
        id: "YOUPWE",
        name: "Youpwé",
        description: "Fishing-harbor station on the southern creek network. \
                      Low-lying area, first to flood when surge and high tide \
                      coincide.",
        latitude: 4.0219,
        longitude: 9.6938,
        has_tide_gauge: true,
    },
];

/// Returns the ids of all registered stations.
pub fn all_station_ids() -> Vec<&'static str> {
    STATION_REGISTRY.iter().map(|s| s.id).collect()
}

/// Returns the stations fitted with a tide gauge.
pub fn tide_gauge_stations() -> Vec<&'static Station> {
    STATION_REGISTRY.iter().filter(|s| s.has_tide_gauge).collect()
}

/// Looks up a station by id. Returns `None` if not found — observation
/// records may carry station ids the registry does not know about yet,
/// and callers must render those rows anyway.
pub fn find_station(id: &str) -> Option<&'static Station> {
    STATION_REGISTRY.iter().find(|s| s.id == id)
}

/// Display name for a station id: registry name when known,
/// the raw id otherwise.
pub fn display_name(id: &str) -> &str {
    find_station(id).map(|s| s.name).unwrap_or(id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
