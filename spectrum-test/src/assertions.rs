//! Custom assertions for testing
//!
//! Specialized checks for status histories and datasets, with messages that
//! name the offending species.

use spectrum_core::{history_year_range, AssessmentRecord, Dataset, Species, YearRange};
use std::collections::HashSet;

/// Assert one record per year covering `range` exactly, in ascending order
pub fn assert_dense_history(species: &Species, range: YearRange) {
    let years: Vec<i32> = species.status_history.iter().map(|r| r.year).collect();
    let expected: Vec<i32> = range.years().collect();
    assert_eq!(
        years, expected,
        "{} history years do not cover {} densely",
        species.id, range
    );
}

/// Assert severity never decreases from one record to the next
pub fn assert_non_improving(history: &[AssessmentRecord]) {
    for pair in history.windows(2) {
        assert!(
            pair[0].status.severity_index() <= pair[1].status.severity_index(),
            "Status improved from {} ({}) to {} ({})",
            pair[0].status,
            pair[0].year,
            pair[1].status,
            pair[1].year
        );
    }
}

/// Assert the structural dataset invariants that hold for both generated and
/// imported data: metadata consistent with the species list, unique ids,
/// sorted histories, current status equal to the latest record and valid
/// coordinates.
pub fn assert_dataset_consistent(dataset: &Dataset) {
    assert_eq!(
        dataset.metadata.total_count,
        dataset.species.len(),
        "Metadata total count does not match species list"
    );

    if let Some(actual) = history_year_range(&dataset.species) {
        assert_eq!(dataset.metadata.year_range, actual, "Metadata year range is stale");
    }

    let ids: HashSet<&str> = dataset.species.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), dataset.species.len(), "Duplicate species ids");

    for species in &dataset.species {
        assert!(
            species.status_history.windows(2).all(|pair| pair[0].year < pair[1].year),
            "{} history is not strictly ascending",
            species.id
        );
        if let Some(latest) = species.status_history.last() {
            assert_eq!(
                species.current_status, latest.status,
                "{} current status differs from its latest record",
                species.id
            );
        }
        assert!(species.location.is_valid(), "{} has invalid coordinates", species.id);
    }
}
