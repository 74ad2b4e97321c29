use crate::query::distinct_categories;
use crate::resolver::resolve_status;
use serde::{Deserialize, Serialize};
use spectrum_core::{Category, Dataset, StatusCode};
use std::collections::BTreeMap;
use std::ops::Index;

/// Count of species per status code.
///
/// Always holds all seven codes, zero when no species has that status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<StatusCode, usize>", into = "BTreeMap<StatusCode, usize>")]
pub struct StatusCounts(BTreeMap<StatusCode, usize>);

impl StatusCounts {
    pub fn new() -> Self {
        Self(StatusCode::ALL.iter().map(|&code| (code, 0)).collect())
    }

    pub fn increment(&mut self, status: StatusCode) {
        *self.0.entry(status).or_insert(0) += 1;
    }

    pub fn get(&self, status: StatusCode) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Entries in LC→EX order
    pub fn iter(&self) -> impl Iterator<Item = (StatusCode, usize)> + '_ {
        self.0.iter().map(|(&code, &count)| (code, count))
    }

    /// Number of keys, always seven
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Species counted as threatened (VU, EN or CR)
    pub fn threatened(&self) -> usize {
        self.iter()
            .filter(|(code, _)| code.is_threatened())
            .map(|(_, count)| count)
            .sum()
    }
}

impl Default for StatusCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<StatusCode> for StatusCounts {
    type Output = usize;

    fn index(&self, status: StatusCode) -> &usize {
        &self.0[&status]
    }
}

/// Parsed entries are merged over a zeroed map, so missing codes read as zero
impl From<BTreeMap<StatusCode, usize>> for StatusCounts {
    fn from(parsed: BTreeMap<StatusCode, usize>) -> Self {
        let mut counts = Self::new();
        counts.0.extend(parsed);
        counts
    }
}

impl From<StatusCounts> for BTreeMap<StatusCode, usize> {
    fn from(counts: StatusCounts) -> Self {
        counts.0
    }
}

impl FromIterator<StatusCode> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = StatusCode>>(iter: I) -> Self {
        let mut counts = Self::new();
        for status in iter {
            counts.increment(status);
        }
        counts
    }
}

/// Per-status counts for one category, with the category total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: Category,
    pub status_counts: StatusCounts,
    pub total: usize,
}

/// Count the species of `category` by their status at `year`.
///
/// Every species of the category contributes exactly once, so the counts sum
/// to the category size.
pub fn category_stats(dataset: &Dataset, category: Category, year: i32) -> StatusCounts {
    dataset
        .species
        .iter()
        .filter(|species| species.category == category)
        .map(|species| resolve_status(species, year))
        .collect()
}

/// `category_stats` for every category present in the dataset, sorted by name
pub fn all_category_stats(dataset: &Dataset, year: i32) -> Vec<CategoryStats> {
    distinct_categories(dataset)
        .into_iter()
        .map(|category| {
            let status_counts = category_stats(dataset, category, year);
            CategoryStats {
                category,
                total: status_counts.total(),
                status_counts,
            }
        })
        .collect()
}

/// Counts of each species' current status, over the whole dataset
pub fn current_status_counts(dataset: &Dataset) -> StatusCounts {
    dataset.species.iter().map(|species| species.current_status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spectrum_test::fixtures::{dataset_of, SpeciesBuilder};

    fn mammal_at_2020(id: &str, status: StatusCode) -> spectrum_core::Species {
        SpeciesBuilder::new(id)
            .category(Category::Mammals)
            .dense_history(2009, 2025, status)
            .build()
    }

    #[test]
    fn test_counts_three_mammals() {
        let dataset = dataset_of(vec![
            mammal_at_2020("species-1", StatusCode::EN),
            mammal_at_2020("species-2", StatusCode::EN),
            mammal_at_2020("species-3", StatusCode::LC),
            SpeciesBuilder::new("species-4")
                .category(Category::Birds)
                .dense_history(2009, 2025, StatusCode::CR)
                .build(),
        ]);

        let stats = category_stats(&dataset, Category::Mammals, 2020);

        let expected: Vec<(StatusCode, usize)> = vec![
            (StatusCode::LC, 1),
            (StatusCode::NT, 0),
            (StatusCode::VU, 0),
            (StatusCode::EN, 2),
            (StatusCode::CR, 0),
            (StatusCode::EW, 0),
            (StatusCode::EX, 0),
        ];
        assert_eq!(stats.iter().collect::<Vec<_>>(), expected);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats[StatusCode::EN], 2);
    }

    #[test]
    fn test_empty_category_has_all_keys() {
        let dataset = dataset_of(vec![mammal_at_2020("species-1", StatusCode::VU)]);

        let stats = category_stats(&dataset, Category::Insects, 2020);
        assert_eq!(stats.len(), 7);
        assert_eq!(stats.total(), 0);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_unrecorded_year_still_counts_every_species() {
        let dataset = dataset_of(vec![
            SpeciesBuilder::new("species-1")
                .history(vec![spectrum_core::AssessmentRecord::new(2015, StatusCode::NT)])
                .build(),
            mammal_at_2020("species-2", StatusCode::CR),
        ]);

        let stats = category_stats(&dataset, Category::Mammals, 1999);
        assert_eq!(stats.total(), 2);
        assert_eq!(stats.get(StatusCode::NT), 1);
        assert_eq!(stats.get(StatusCode::CR), 1);
    }

    #[test]
    fn test_all_category_stats_sorted_by_name() {
        let dataset = dataset_of(vec![
            mammal_at_2020("species-1", StatusCode::VU),
            SpeciesBuilder::new("species-2")
                .category(Category::Birds)
                .dense_history(2009, 2025, StatusCode::EN)
                .build(),
        ]);

        let all = all_category_stats(&dataset, 2020);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category, Category::Birds);
        assert_eq!(all[0].total, 1);
        assert_eq!(all[0].status_counts.get(StatusCode::EN), 1);
        assert_eq!(all[1].category, Category::Mammals);
        assert_eq!(all[1].status_counts.threatened(), 1);
    }

    #[test]
    fn test_serializes_as_code_map() {
        let counts: StatusCounts = vec![StatusCode::EX, StatusCode::LC].into_iter().collect();
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json["EX"], 1);
        assert_eq!(json["LC"], 1);
        assert_eq!(json["VU"], 0);
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_deserialize_fills_missing_codes() {
        let empty: StatusCounts = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.len(), 7);
        assert_eq!(empty[StatusCode::CR], 0);

        let partial: StatusCounts = serde_json::from_str(r#"{"EN": 3}"#).unwrap();
        assert_eq!(partial.len(), 7);
        assert_eq!(partial[StatusCode::EN], 3);
        assert_eq!(partial.total(), 3);
    }
}
