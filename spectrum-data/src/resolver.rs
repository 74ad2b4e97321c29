//! Point-in-time status resolution

use spectrum_core::{Species, StatusCode};

/// Status of a species at `year`.
///
/// An exact-year record wins. Without one, the status of the *earliest* record
/// is returned, not the nearest prior one. An empty history resolves to `LC`.
pub fn resolve_status(species: &Species, year: i32) -> StatusCode {
    if let Some(record) = species.record_for(year) {
        return record.status;
    }

    species
        .earliest_record()
        .map(|record| record.status)
        .unwrap_or_default()
}
