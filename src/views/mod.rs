/// Presentation view models.
///
/// Each submodule builds one read-only, stateless view as a pure
/// projection of the filtered `ObservationTable` plus user selections.
/// None of them mutate anything; re-rendering is recomputation.
///
/// Submodules:
/// - `cards` — recent-observations table rows and station summary cards.
/// - `map` — one marker per distinct station, plus the wind-embed URL.
/// - `charts` — single-station trend and cross-station comparison series.

pub mod cards;
pub mod charts;
pub mod map;
