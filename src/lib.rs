/// Coastal weather dashboard core for the Douala monitoring network.
///
/// Everything downstream of the fetch is pure: observations come in once
/// per page load, and each view is a projection of the filtered table plus
/// user selections. The binary in `main.rs` wires fetch → assemble →
/// render → export together; this library holds all the logic.

pub mod alert;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod stations;
pub mod table;
pub mod views;
