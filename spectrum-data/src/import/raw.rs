//! Loosely-typed records in the legacy export shape.
//!
//! Every field is optional on the wire; normalization decides the defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSpecies {
    pub scientific_name: String,
    pub common_name: String,
    pub category: Option<String>,
    pub iucn_url: Option<String>,
    pub img_url: Option<String>,
    pub location: RawLocation,
    pub status_history: Vec<RawHistoryEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLocation {
    pub lat: f64,
    pub lng: f64,
    pub country: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHistoryEntry {
    pub year: i32,
    pub status: Option<String>,
}

impl RawHistoryEntry {
    pub fn new(year: i32, status: impl Into<String>) -> Self {
        Self {
            year,
            status: Some(status.into()),
        }
    }
}
