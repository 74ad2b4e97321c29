//! Synthetic status histories and the demonstration dataset
//!
//! Every function takes its random source explicitly, so seeding a
//! `rand::rngs::StdRng` gives reproducible output.

pub mod catalog;

use catalog::{names_for, SAMPLE_LOCATIONS, THREAT_SCOPE, THREAT_SEVERITY, THREAT_TIMING, THREAT_TYPES};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use spectrum_core::{
    utc_now, AssessmentRecord, Category, Dataset, Location, PopulationTrend, Species, StatusCode,
    Threat, YearRange,
};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Initial status weights in percent, LC through EX
pub const INITIAL_STATUS_WEIGHTS: [u32; 7] = [30, 20, 20, 15, 10, 4, 1];

/// Chance that an assessment year worsens the status
pub const WORSEN_PROBABILITY: f64 = 0.3;

/// Upper bound on assessment events per species
pub const MAX_ASSESSMENTS: usize = 3;

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/400x300/4A1F1F/FFFFFF";
const REFERENCE_URL_BASE: &str = "https://www.iucnredlist.org/species";

/// One record per year in `[start_year, end_year]`, non-decreasing in severity.
///
/// Assessment years (1–3, drawn from `[start_year, end_year)`) may worsen the
/// status by one or two steps and are the only records carrying an
/// `assessed_date`. Returns an empty history when `end_year < start_year`.
pub fn generate_history<R: Rng + ?Sized>(start_year: i32, end_year: i32, rng: &mut R) -> Vec<AssessmentRecord> {
    if end_year < start_year {
        return Vec::new();
    }

    let mut severity = draw_initial_severity(rng);
    let assessment_years = draw_assessment_years(start_year, end_year, rng);

    (start_year..=end_year)
        .map(|year| {
            if !assessment_years.contains(&year) {
                return AssessmentRecord::new(year, StatusCode::from_severity_index(severity));
            }

            if severity < StatusCode::MAX_SEVERITY && rng.gen_bool(WORSEN_PROBABILITY) {
                severity = (severity + rng.gen_range(1..=2)).min(StatusCode::MAX_SEVERITY);
            }
            AssessmentRecord::assessed(year, StatusCode::from_severity_index(severity))
        })
        .collect()
}

fn draw_initial_severity<R: Rng + ?Sized>(rng: &mut R) -> usize {
    WeightedIndex::new(INITIAL_STATUS_WEIGHTS)
        .map(|weights| weights.sample(rng))
        .unwrap_or(0)
}

fn draw_assessment_years<R: Rng + ?Sized>(start_year: i32, end_year: i32, rng: &mut R) -> BTreeSet<i32> {
    let span = (end_year - start_year) as usize;
    if span == 0 {
        return BTreeSet::new();
    }

    let count = rng.gen_range(1..=MAX_ASSESSMENTS).min(span);
    index::sample(rng, span, count)
        .into_iter()
        .map(|offset| start_year + offset as i32)
        .collect()
}

/// Build one synthetic species with id `species-{id}`.
///
/// Names cycle through the category catalog by `id`; location, population
/// trend and threats are drawn at random.
pub fn generate_species<R: Rng + ?Sized>(id: usize, category: Category, range: YearRange, rng: &mut R) -> Species {
    let names = names_for(category);
    let (common_name, scientific_name) = names[id % names.len()];

    let sample = SAMPLE_LOCATIONS[rng.gen_range(0..SAMPLE_LOCATIONS.len())];
    let status_history = generate_history(range.min, range.max, rng);
    let current_status = status_history
        .last()
        .map(|record| record.status)
        .unwrap_or_default();

    let population_trend = PopulationTrend::ALL
        .choose(rng)
        .copied()
        .unwrap_or_default();

    let threat_count = rng.gen_range(1..=3);
    let threats = THREAT_TYPES
        .choose_multiple(rng, threat_count)
        .map(|(code, title)| Threat {
            code: code.to_string(),
            title: title.to_string(),
            timing: Some(THREAT_TIMING.to_string()),
            scope: Some(THREAT_SCOPE.to_string()),
            severity: Some(THREAT_SEVERITY.to_string()),
        })
        .collect();

    debug!(id, %category, %current_status, "Generated species {}", common_name);

    Species {
        id: format!("species-{}", id),
        scientific_name: scientific_name.to_string(),
        common_name: common_name.to_string(),
        category,
        current_status,
        status_history,
        location: Location::new(sample.latitude, sample.longitude)
            .with_country(sample.country)
            .with_region(sample.country),
        image_url: placeholder_image_url(common_name),
        population_trend,
        threats,
        description: Some(describe(common_name, scientific_name, population_trend, sample.country)),
        external_reference_url: Some(format!("{}/{}", REFERENCE_URL_BASE, id)),
    }
}

/// Spaces are encoded as `%20`; a literal `+` is already escaped as `%2B`
fn placeholder_image_url(common_name: &str) -> Option<String> {
    let mut url = url::Url::parse_with_params(PLACEHOLDER_IMAGE_BASE, &[("text", common_name)]).ok()?;
    let query = url.query().map(|query| query.replace('+', "%20"));
    url.set_query(query.as_deref());
    Some(url.into())
}

fn describe(common_name: &str, scientific_name: &str, trend: PopulationTrend, country: &str) -> String {
    format!(
        "The {} ({}) faces significant threats due to habitat loss, climate change, and human \
         activities. This species has experienced a {} population trend, with its range primarily \
         located in {}. Conservation efforts including habitat protection, anti-poaching measures, \
         and community engagement are critical to prevent further decline and ensure the survival \
         of this remarkable species for future generations.",
        common_name, scientific_name, trend, country
    )
}

/// Number of species assigned to each category, in `Category::ALL` order.
///
/// Each category gets `count / 7`; the last one also takes the remainder.
pub fn category_allocation(count: usize) -> Vec<(Category, usize)> {
    let per_category = count / Category::ALL.len();
    let last = Category::ALL.len() - 1;

    Category::ALL
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            let share = if i == last {
                count - per_category * last
            } else {
                per_category
            };
            (category, share)
        })
        .collect()
}

/// Build the demonstration dataset of `count` synthetic species.
///
/// Ids start at 1 and run across categories in allocation order.
pub fn generate_dataset<R: Rng + ?Sized>(count: usize, range: YearRange, rng: &mut R) -> Dataset {
    let mut species = Vec::with_capacity(count);
    let mut next_id = 1;

    for (category, share) in category_allocation(count) {
        for _ in 0..share {
            species.push(generate_species(next_id, category, range, rng));
            next_id += 1;
        }
    }

    let dataset = Dataset::new(species, utc_now(), range);
    info!(
        species = dataset.len(),
        years = %dataset.metadata.year_range,
        "Generated synthetic dataset"
    );
    dataset
}
