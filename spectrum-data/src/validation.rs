//! Structural checks over a canonical dataset

use spectrum_core::{history_year_range, Dataset, StatusCode, YearRange};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    CountMismatch { declared: usize, actual: usize },
    YearRangeMismatch { declared: YearRange, actual: Option<YearRange> },
    DuplicateId { species_id: String },
    EmptyHistory { species_id: String },
    UnsortedHistory { species_id: String },
    DuplicateYear { species_id: String, year: i32 },
    MissingYear { species_id: String, year: i32 },
    CurrentStatusMismatch { species_id: String, current: StatusCode, latest: StatusCode },
    InvalidLocation { species_id: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch { declared, actual } => {
                write!(f, "metadata declares {} species but dataset has {}", declared, actual)
            }
            Self::YearRangeMismatch { declared, actual: Some(actual) } => {
                write!(f, "metadata year range {} differs from history span {}", declared, actual)
            }
            Self::YearRangeMismatch { declared, actual: None } => {
                write!(f, "metadata year range {} but no history records exist", declared)
            }
            Self::DuplicateId { species_id } => write!(f, "{}: duplicate id", species_id),
            Self::EmptyHistory { species_id } => write!(f, "{}: empty status history", species_id),
            Self::UnsortedHistory { species_id } => {
                write!(f, "{}: status history is not sorted by year", species_id)
            }
            Self::DuplicateYear { species_id, year } => {
                write!(f, "{}: more than one record for {}", species_id, year)
            }
            Self::MissingYear { species_id, year } => write!(f, "{}: no record for {}", species_id, year),
            Self::CurrentStatusMismatch { species_id, current, latest } => write!(
                f,
                "{}: current status {} differs from latest record {}",
                species_id, current, latest
            ),
            Self::InvalidLocation { species_id } => {
                write!(f, "{}: coordinates out of range", species_id)
            }
        }
    }
}

/// Report every structural problem in `dataset`.
///
/// `range` is the span each history is expected to cover densely.
pub fn check_dataset(dataset: &Dataset, range: YearRange) -> Vec<Violation> {
    let mut violations = Vec::new();

    if dataset.metadata.total_count != dataset.species.len() {
        violations.push(Violation::CountMismatch {
            declared: dataset.metadata.total_count,
            actual: dataset.species.len(),
        });
    }

    let actual_range = history_year_range(&dataset.species);
    if let Some(actual) = actual_range {
        if actual != dataset.metadata.year_range {
            violations.push(Violation::YearRangeMismatch {
                declared: dataset.metadata.year_range,
                actual: Some(actual),
            });
        }
    } else if !dataset.is_empty() {
        violations.push(Violation::YearRangeMismatch {
            declared: dataset.metadata.year_range,
            actual: None,
        });
    }

    let mut seen_ids = HashSet::new();
    for species in &dataset.species {
        let species_id = species.id.clone();

        if !seen_ids.insert(species.id.as_str()) {
            violations.push(Violation::DuplicateId { species_id: species_id.clone() });
        }

        if !species.location.is_valid() {
            violations.push(Violation::InvalidLocation { species_id: species_id.clone() });
        }

        let history = &species.status_history;
        if history.is_empty() {
            violations.push(Violation::EmptyHistory { species_id });
            continue;
        }

        if history.windows(2).any(|pair| pair[1].year < pair[0].year) {
            violations.push(Violation::UnsortedHistory { species_id: species_id.clone() });
        }

        let mut years = HashSet::new();
        for record in history {
            if !years.insert(record.year) {
                violations.push(Violation::DuplicateYear {
                    species_id: species_id.clone(),
                    year: record.year,
                });
            }
        }

        for year in range.years().filter(|year| !years.contains(year)) {
            violations.push(Violation::MissingYear {
                species_id: species_id.clone(),
                year,
            });
        }

        if let Some(latest) = species.latest_record() {
            if latest.status != species.current_status {
                violations.push(Violation::CurrentStatusMismatch {
                    species_id,
                    current: species.current_status,
                    latest: latest.status,
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_dataset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use spectrum_core::{AssessmentRecord, Location};
    use spectrum_test::fixtures::{dataset_of, SpeciesBuilder};

    #[test]
    fn test_generated_dataset_is_clean() {
        let mut rng = StdRng::seed_from_u64(8);
        let dataset = generate_dataset(50, YearRange::default(), &mut rng);
        assert_eq!(check_dataset(&dataset, YearRange::default()), vec![]);
    }

    #[test]
    fn test_reports_history_problems() {
        let range = YearRange { min: 2010, max: 2012 };
        let mut dataset = dataset_of(vec![
            SpeciesBuilder::new("species-1")
                .history(vec![
                    AssessmentRecord::new(2012, StatusCode::VU),
                    AssessmentRecord::new(2010, StatusCode::LC),
                    AssessmentRecord::new(2010, StatusCode::LC),
                ])
                .status(StatusCode::EN)
                .build(),
            SpeciesBuilder::new("species-1")
                .location(Location::new(100.0, 0.0))
                .build(),
        ]);
        dataset.metadata.total_count = 5;

        let violations = check_dataset(&dataset, range);
        let id = "species-1".to_string();

        assert!(violations.contains(&Violation::CountMismatch { declared: 5, actual: 2 }));
        assert!(violations.contains(&Violation::UnsortedHistory { species_id: id.clone() }));
        assert!(violations.contains(&Violation::DuplicateYear { species_id: id.clone(), year: 2010 }));
        assert!(violations.contains(&Violation::MissingYear { species_id: id.clone(), year: 2011 }));
        assert!(violations.contains(&Violation::CurrentStatusMismatch {
            species_id: id.clone(),
            current: StatusCode::EN,
            latest: StatusCode::VU,
        }));
        assert!(violations.contains(&Violation::DuplicateId { species_id: id.clone() }));
        assert!(violations.contains(&Violation::InvalidLocation { species_id: id.clone() }));
        assert!(violations.contains(&Violation::EmptyHistory { species_id: id }));
    }

    #[test]
    fn test_violation_messages() {
        let violation = Violation::MissingYear {
            species_id: "species-3".to_string(),
            year: 2014,
        };
        assert_eq!(violation.to_string(), "species-3: no record for 2014");
    }
}
