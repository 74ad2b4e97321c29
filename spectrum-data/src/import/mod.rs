//! Legacy export normalization
//!
//! Converts the loosely-typed legacy record array into a canonical [`Dataset`].
//! Nothing is rejected: unknown categories fall back to [`Category::FALLBACK`]
//! and unknown status codes to `LC`.

pub mod raw;

pub use raw::{RawHistoryEntry, RawLocation, RawSpecies};

use crate::formats::json::{read_raw_records, write_dataset_atomic};
use crate::history::fill_gaps;
use spectrum_core::{
    utc_now, AssessmentRecord, Category, Dataset, Location, PopulationTrend,
    Species, SpectrumError, SpectrumResult, StatusCode, YearRange,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Log a progress line every this many species
const PROGRESS_INTERVAL: usize = 1000;

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Fill missing years inside each species' recorded span
    pub fill_gaps: bool,
    /// Year range recorded when no species carries any history
    pub fallback_range: YearRange,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            fill_gaps: false,
            fallback_range: YearRange::default(),
        }
    }
}

/// Map a raw category string onto a canonical category
pub fn normalize_category(raw: &str) -> Category {
    Category::from_taxon_name(raw).unwrap_or_else(|| {
        warn!("Unrecognized category '{}', using {}", raw, Category::FALLBACK);
        Category::FALLBACK
    })
}

/// Map a raw status string onto a status code
pub fn normalize_status(raw: &str) -> StatusCode {
    raw.parse().unwrap_or_else(|_| {
        warn!("Invalid status code '{}', using {}", raw, StatusCode::LC);
        StatusCode::LC
    })
}

/// Normalize with default options
pub fn normalize(records: &[RawSpecies]) -> Dataset {
    normalize_with(records, &NormalizeOptions::default())
}

/// Normalize every record; the metadata year range spans all resulting histories
pub fn normalize_with(records: &[RawSpecies], options: &NormalizeOptions) -> Dataset {
    let mut species = Vec::with_capacity(records.len());

    for (index, raw) in records.iter().enumerate() {
        species.push(normalize_species(raw, index, options));

        if (index + 1) % PROGRESS_INTERVAL == 0 {
            info!("Processed {}/{} species", index + 1, records.len());
        }
    }

    let dataset = Dataset::new(species, utc_now(), options.fallback_range);
    info!(
        species = dataset.metadata.total_count,
        years = %dataset.metadata.year_range,
        "Normalized legacy records"
    );
    dataset
}

/// Convert one raw record; `index` is its position in the input
pub fn normalize_species(raw: &RawSpecies, index: usize, options: &NormalizeOptions) -> Species {
    let mut entries: Vec<&RawHistoryEntry> = raw.status_history.iter().collect();
    entries.sort_by_key(|entry| entry.year);

    let current_status = entries
        .last()
        .map(|entry| normalize_status(entry.status.as_deref().unwrap_or_default()))
        .unwrap_or_default();

    let mut status_history: Vec<AssessmentRecord> = entries
        .iter()
        .map(|entry| {
            AssessmentRecord::new(
                entry.year,
                normalize_status(entry.status.as_deref().unwrap_or_default()),
            )
        })
        .collect();

    if options.fill_gaps {
        status_history = fill_gaps(&status_history);
    }

    let country = non_empty(raw.location.country.as_deref());
    let region = non_empty(raw.location.region.as_deref()).or_else(|| country.clone());
    let mut location = Location::new(raw.location.lat, raw.location.lng);
    location.country = country;
    location.region = region;
    if !location.is_valid() {
        debug!(index, "Clamping out-of-range coordinates");
    }

    Species {
        id: format!("species-{}", index + 1),
        scientific_name: raw.scientific_name.clone(),
        common_name: raw.common_name.clone(),
        category: normalize_category(raw.category.as_deref().unwrap_or_default()),
        current_status,
        status_history,
        location: location.clamped(),
        image_url: non_empty(raw.img_url.as_deref()),
        population_trend: PopulationTrend::Unknown,
        threats: Vec::new(),
        description: None,
        external_reference_url: non_empty(raw.iucn_url.as_deref()),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read a legacy export, normalize it and atomically write the canonical dataset.
///
/// `output` may equal `input`; the original stays intact until the rename.
pub fn transform_file(input: &Path, output: &Path, options: &NormalizeOptions) -> SpectrumResult<Dataset> {
    if !input.exists() {
        return Err(SpectrumError::NotFound(format!(
            "Input file not found: {}",
            input.display()
        )));
    }

    let records = read_raw_records(input)?;
    info!("Found {} species in {}", records.len(), input.display());

    let dataset = normalize_with(&records, options);
    write_dataset_atomic(output, &dataset)?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(category: &str, history: &[(i32, &str)]) -> RawSpecies {
        RawSpecies {
            scientific_name: "Panthera onca".to_string(),
            common_name: "Jaguar".to_string(),
            category: Some(category.to_string()),
            status_history: history
                .iter()
                .map(|(year, status)| RawHistoryEntry::new(*year, *status))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_defaults() {
        assert_eq!(normalize_category(" MAMMALIA "), Category::Mammals);
        assert_eq!(normalize_category("Aves"), Category::Birds);
        assert_eq!(normalize_category("unknown-taxon"), Category::FALLBACK);
        assert_eq!(normalize_category(""), Category::FALLBACK);
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(normalize_status("en"), StatusCode::EN);
        assert_eq!(normalize_status("ZZ"), StatusCode::LC);
        assert_eq!(normalize_status(""), StatusCode::LC);
        // Codes are upper-cased only, never trimmed
        assert_eq!(normalize_status(" EN "), StatusCode::LC);
    }

    #[test]
    fn test_canonical_values_are_stable() {
        for category in Category::ALL {
            assert_eq!(normalize_category(category.as_str()), category);
        }
        for status in StatusCode::ALL {
            assert_eq!(normalize_status(status.as_str()), status);
        }
    }

    #[test]
    fn test_current_status_from_chronologically_last_entry() {
        let record = raw("reptilia", &[(2020, "cr"), (2010, "vu"), (2015, "en")]);
        let species = normalize_species(&record, 4, &NormalizeOptions::default());

        assert_eq!(species.id, "species-5");
        assert_eq!(species.category, Category::Reptiles);
        assert_eq!(species.current_status, StatusCode::CR);
        let years: Vec<i32> = species.status_history.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2010, 2015, 2020]);
    }

    #[test]
    fn test_empty_history_defaults_to_least_concern() {
        let species = normalize_species(&raw("aves", &[]), 0, &NormalizeOptions::default());
        assert_eq!(species.current_status, StatusCode::LC);
        assert!(species.status_history.is_empty());
    }

    #[test]
    fn test_fill_gaps_option() {
        let record = raw("fish", &[(2010, "NT"), (2013, "VU")]);
        let options = NormalizeOptions {
            fill_gaps: true,
            ..Default::default()
        };

        let species = normalize_species(&record, 0, &options);
        assert_eq!(species.status_history.len(), 4);
        assert_eq!(species.status_history[2].status, StatusCode::NT);
    }

    #[test]
    fn test_location_and_links() {
        let mut record = raw("plantae", &[(2012, "LC")]);
        record.location = RawLocation {
            lat: -120.0,
            lng: 36.8,
            country: Some("Kenya".to_string()),
            region: Some("  ".to_string()),
        };
        record.img_url = Some(String::new());
        record.iucn_url = Some("https://www.iucnredlist.org/species/42".to_string());

        let species = normalize_species(&record, 0, &NormalizeOptions::default());
        assert_eq!(species.location.latitude, -90.0);
        assert_eq!(species.location.region.as_deref(), Some("Kenya"));
        assert_eq!(species.image_url, None);
        assert_eq!(species.population_trend, PopulationTrend::Unknown);
        assert!(species.threats.is_empty());
        assert_eq!(
            species.external_reference_url.as_deref(),
            Some("https://www.iucnredlist.org/species/42")
        );
    }

    #[test]
    fn test_metadata_spans_all_histories() {
        let records = vec![
            raw("mammalia", &[(2012, "LC"), (2016, "NT")]),
            raw("aves", &[(2009, "VU")]),
            raw("insecta", &[]),
        ];

        let dataset = normalize(&records);
        assert_eq!(dataset.metadata.total_count, 3);
        assert_eq!(dataset.metadata.year_range, YearRange { min: 2009, max: 2016 });
        assert_eq!(dataset.species[2].id, "species-3");
    }

    #[test]
    fn test_no_history_anywhere_uses_fallback_range() {
        let options = NormalizeOptions {
            fill_gaps: false,
            fallback_range: YearRange { min: 2001, max: 2002 },
        };
        let dataset = normalize_with(&[raw("aves", &[])], &options);
        assert_eq!(dataset.metadata.year_range, options.fallback_range);
    }
}
