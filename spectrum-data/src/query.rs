//! Filtering and listing helpers over a loaded dataset
//!
//! All functions borrow from the dataset and return new views; nothing is mutated.

use crate::resolver::resolve_status;
use spectrum_core::{Category, Dataset, Species, StatusCode};

/// Species that carry a record for exactly `year`, optionally restricted to a category.
///
/// Presence is existence-based: a species without an exact-year record is left
/// out even though [`resolve_status`] would still answer for it.
pub fn species_in_year<'a>(dataset: &'a Dataset, year: i32, category: Option<Category>) -> Vec<&'a Species> {
    dataset
        .species
        .iter()
        .filter(|species| category.map_or(true, |c| species.category == c))
        .filter(|species| species.has_record_for(year))
        .collect()
}

/// Categories present in the dataset, deduplicated and sorted by name
pub fn distinct_categories(dataset: &Dataset) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for species in &dataset.species {
        if !categories.contains(&species.category) {
            categories.push(species.category);
        }
    }
    categories.sort_by_key(|category| category.as_str());
    categories
}

/// Keep the species whose resolved status at `year` equals `status`
pub fn filter_by_status<'a, I>(species: I, year: i32, status: StatusCode) -> Vec<&'a Species>
where
    I: IntoIterator<Item = &'a Species>,
{
    species
        .into_iter()
        .filter(|s| resolve_status(s, year) == status)
        .collect()
}

pub fn find_species<'a>(dataset: &'a Dataset, id: &str) -> Option<&'a Species> {
    dataset.species.iter().find(|species| species.id == id)
}
