/// Coarse taxonomic groupings used for filtering and aggregation
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mammals,
    Birds,
    Fish,
    Reptiles,
    Amphibians,
    Insects,
    Plants,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 7] = [
        Category::Mammals,
        Category::Birds,
        Category::Fish,
        Category::Reptiles,
        Category::Amphibians,
        Category::Insects,
        Category::Plants,
    ];

    /// Category used when an imported taxon name is not recognised
    pub const FALLBACK: Category = Category::Mammals;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mammals => "Mammals",
            Self::Birds => "Birds",
            Self::Fish => "Fish",
            Self::Reptiles => "Reptiles",
            Self::Amphibians => "Amphibians",
            Self::Insects => "Insects",
            Self::Plants => "Plants",
        }
    }

    /// Map a taxonomic class or colloquial group name onto a category.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for unrecognised names.
    pub fn from_taxon_name(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "mammalia" | "mammals" => Some(Self::Mammals),
            "aves" | "birds" => Some(Self::Birds),
            "actinopterygii" | "fish" => Some(Self::Fish),
            "reptilia" | "reptiles" => Some(Self::Reptiles),
            "amphibia" | "amphibians" => Some(Self::Amphibians),
            "insecta" | "insects" => Some(Self::Insects),
            "plantae" | "plants" => Some(Self::Plants),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_taxon_name(s).ok_or_else(|| format!("Unknown category: {}", s))
    }
}
