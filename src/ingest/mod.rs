/// Data acquisition from the remote observation API.
///
/// Submodules:
/// - `api` — HTTP client and JSON parsing for the observation endpoint.

pub mod api;
