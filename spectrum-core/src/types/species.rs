//! Species records and their assessment timelines

use super::{Category, StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One IUCN evaluation event, or an interpolated year carrying a prior status forward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub year: i32,
    pub status: StatusCode,
    /// Set only on years where an assessment actually took place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_date: Option<NaiveDate>,
}

impl AssessmentRecord {
    /// Interpolated record without an assessment date
    pub fn new(year: i32, status: StatusCode) -> Self {
        Self {
            year,
            status,
            assessed_date: None,
        }
    }

    /// Record for a year in which an assessment took place (dated January 1st)
    pub fn assessed(year: i32, status: StatusCode) -> Self {
        Self {
            year,
            status,
            assessed_date: NaiveDate::from_ymd_opt(year, 1, 1),
        }
    }

    pub fn is_assessment(&self) -> bool {
        self.assessed_date.is_some()
    }
}

/// Direction of a species' population over recent assessments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PopulationTrend {
    Decreasing,
    Stable,
    Increasing,
    #[default]
    Unknown,
}

impl PopulationTrend {
    pub const ALL: [PopulationTrend; 4] = [
        PopulationTrend::Decreasing,
        PopulationTrend::Stable,
        PopulationTrend::Increasing,
        PopulationTrend::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
            Self::Increasing => "increasing",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PopulationTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threat classification entry (IUCN threats scheme)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Threat {
    pub code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// Representative geographic point for a species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Location {
    pub const LATITUDE_BOUNDS: (f64, f64) = (-90.0, 90.0);
    pub const LONGITUDE_BOUNDS: (f64, f64) = (-180.0, 180.0);

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            country: None,
            region: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        (Self::LATITUDE_BOUNDS.0..=Self::LATITUDE_BOUNDS.1).contains(&self.latitude)
            && (Self::LONGITUDE_BOUNDS.0..=Self::LONGITUDE_BOUNDS.1).contains(&self.longitude)
    }

    /// Copy with coordinates forced into the valid ranges
    pub fn clamped(&self) -> Self {
        let mut location = self.clone();
        location.latitude = clamp_coordinate(self.latitude, Self::LATITUDE_BOUNDS);
        location.longitude = clamp_coordinate(self.longitude, Self::LONGITUDE_BOUNDS);
        location
    }
}

fn clamp_coordinate(value: f64, (min, max): (f64, f64)) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// A species and its status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: String,
    pub scientific_name: String,
    pub common_name: String,
    pub category: Category,
    #[serde(alias = "status")]
    pub current_status: StatusCode,
    /// Sorted by year ascending, one record per year
    pub status_history: Vec<AssessmentRecord>,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub population_trend: PopulationTrend,
    #[serde(default)]
    pub threats: Vec<Threat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "iucnUrl", skip_serializing_if = "Option::is_none")]
    pub external_reference_url: Option<String>,
}

impl Species {
    /// Record whose year exactly matches
    pub fn record_for(&self, year: i32) -> Option<&AssessmentRecord> {
        self.status_history.iter().find(|record| record.year == year)
    }

    pub fn has_record_for(&self, year: i32) -> bool {
        self.status_history.iter().any(|record| record.year == year)
    }

    pub fn earliest_record(&self) -> Option<&AssessmentRecord> {
        self.status_history.first()
    }

    /// Record with the highest year (the last one in a sorted history)
    pub fn latest_record(&self) -> Option<&AssessmentRecord> {
        self.status_history.iter().max_by_key(|record| record.year)
    }

    /// Years in which an assessment took place
    pub fn assessment_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.status_history
            .iter()
            .filter(|record| record.is_assessment())
            .map(|record| record.year)
    }
}
