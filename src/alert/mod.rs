/// Status derivation for display: icon categories and alert markers.
///
/// Submodules:
/// - `icons` — pure threshold mapping from readings to display symbols.

pub mod icons;
