//! Test fixtures and data builders
//!
//! Common species, datasets and legacy exports for use across the Spectrum workspace.

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spectrum_core::{
    AssessmentRecord, Category, Dataset, Location, PopulationTrend, Species, StatusCode, YearRange,
};

/// Builder for species records with sensible test defaults
#[derive(Debug, Clone)]
pub struct SpeciesBuilder {
    id: String,
    common_name: Option<String>,
    scientific_name: String,
    category: Category,
    status: Option<StatusCode>,
    history: Vec<AssessmentRecord>,
    location: Location,
}

impl SpeciesBuilder {
    /// Mammal with an empty history at (0, 0)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            common_name: None,
            scientific_name: "Testus exemplaris".to_string(),
            category: Category::Mammals,
            status: None,
            history: Vec::new(),
            location: Location::new(0.0, 0.0),
        }
    }

    pub fn common_name(mut self, name: impl Into<String>) -> Self {
        self.common_name = Some(name.into());
        self
    }

    pub fn scientific_name(mut self, name: impl Into<String>) -> Self {
        self.scientific_name = name.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Override the current status instead of taking it from the last record
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Replace the history verbatim (order preserved)
    pub fn history(mut self, history: Vec<AssessmentRecord>) -> Self {
        self.history = history;
        self
    }

    /// Append one undated record
    pub fn record(mut self, year: i32, status: StatusCode) -> Self {
        self.history.push(AssessmentRecord::new(year, status));
        self
    }

    /// One record per year in `[start, end]`, all with the same status
    pub fn dense_history(mut self, start: i32, end: i32, status: StatusCode) -> Self {
        self.history = (start..=end).map(|year| AssessmentRecord::new(year, status)).collect();
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn build(self) -> Species {
        let current_status = self
            .status
            .or_else(|| self.history.last().map(|record| record.status))
            .unwrap_or_default();

        Species {
            common_name: self.common_name.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            scientific_name: self.scientific_name,
            category: self.category,
            current_status,
            status_history: self.history,
            location: self.location,
            image_url: None,
            population_trend: PopulationTrend::Unknown,
            threats: Vec::new(),
            description: None,
            external_reference_url: None,
        }
    }
}

/// Wrap species in a dataset with derived metadata and a fixed timestamp
pub fn dataset_of(species: Vec<Species>) -> Dataset {
    let last_updated = Utc
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    Dataset::new(species, last_updated, YearRange::default())
}

/// Deterministic RNG for generator tests
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Legacy export with the quirks seen in real files: Latin class names,
/// lower-case and unknown status codes, unsorted histories and missing fields.
pub const LEGACY_EXPORT: &str = r#"[
  {
    "scientificName": "Panthera tigris",
    "commonName": "Tiger",
    "category": "Mammalia",
    "iucnUrl": "https://www.iucnredlist.org/species/15955",
    "imgUrl": "https://example.org/tiger.jpg",
    "location": {"lat": 28.6139, "lng": 77.209, "country": "India"},
    "statusHistory": [
      {"year": 2015, "status": "en"},
      {"year": 2010, "status": "VU"},
      {"year": 2020, "status": "EN"}
    ]
  },
  {
    "scientificName": "Strigops habroptila",
    "commonName": "Kakapo",
    "category": "aves",
    "location": {"lat": -46.6, "lng": 168.3, "country": "New Zealand", "region": "Codfish Island"},
    "statusHistory": [
      {"year": 2009, "status": "CR"},
      {"year": 2024, "status": "ZZ"}
    ]
  },
  {
    "scientificName": "Incertae sedis",
    "commonName": "Mystery Taxon",
    "category": "unknown-taxon",
    "location": {"lat": 0.0, "lng": 0.0},
    "statusHistory": []
  }
]"#;
