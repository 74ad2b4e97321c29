//! Dataset container and year-range bounds

use super::Species;
use crate::error::{SpectrumError, SpectrumResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const DEFAULT_MIN_YEAR: i32 = 2009;
pub const DEFAULT_MAX_YEAR: i32 = 2025;

/// Inclusive range of assessment years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: i32, max: i32) -> SpectrumResult<Self> {
        if min > max {
            return Err(SpectrumError::InvalidInput(format!(
                "Year range start {} is after end {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Number of years covered
    pub fn len(&self) -> usize {
        (i64::from(self.max) - i64::from(self.min) + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest range covering every year in the iterator, in a single pass
    pub fn spanning<I>(years: I) -> Option<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        years.into_iter().fold(None, |acc, year| match acc {
            None => Some(Self { min: year, max: year }),
            Some(range) => Some(Self {
                min: range.min.min(year),
                max: range.max.max(year),
            }),
        })
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    pub total_count: usize,
    pub last_updated: DateTime<Utc>,
    pub year_range: YearRange,
}

/// The full species collection as persisted on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub species: Vec<Species>,
    pub metadata: DatasetMetadata,
}

impl Dataset {
    /// Build a dataset and derive its metadata from the species list.
    ///
    /// `fallback_range` is used only when no species carries any history.
    pub fn new(species: Vec<Species>, last_updated: DateTime<Utc>, fallback_range: YearRange) -> Self {
        let year_range = history_year_range(&species).unwrap_or(fallback_range);
        Self {
            metadata: DatasetMetadata {
                total_count: species.len(),
                last_updated,
                year_range,
            },
            species,
        }
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Global min/max year across every species' history
pub fn history_year_range(species: &[Species]) -> Option<YearRange> {
    YearRange::spanning(
        species
            .iter()
            .flat_map(|s| s.status_history.iter().map(|record| record.year)),
    )
}
