//! Presentation-ready projections for map and chart consumers

use crate::resolver::resolve_status;
use crate::stats::StatusCounts;
use serde::{Deserialize, Serialize};
use spectrum_core::{Category, Dataset, StatusCode};

/// One map point, colored by the species' status in the viewed year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub label: String,
    /// Identifier handed back when the marker is activated
    pub species_id: String,
    pub status: StatusCode,
}

/// Markers for every species of `category` (or all), colored by the status
/// resolved for `year`
pub fn map_markers(dataset: &Dataset, year: i32, category: Option<Category>) -> Vec<MapMarker> {
    dataset
        .species
        .iter()
        .filter(|species| category.map_or(true, |category| species.category == category))
        .map(|species| {
            let status = resolve_status(species, year);
            MapMarker {
                latitude: species.location.latitude,
                longitude: species.location.longitude,
                color: status.color().to_string(),
                label: species.common_name.clone(),
                species_id: species.id.clone(),
                status,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub status: StatusCode,
    pub count: usize,
    pub label: String,
    pub color: String,
}

/// Seven bar-chart entries in severity order, zero counts included
pub fn chart_series(counts: &StatusCounts) -> Vec<ChartEntry> {
    StatusCode::ALL
        .iter()
        .map(|&status| ChartEntry {
            status,
            count: counts.get(status),
            label: status.label().to_string(),
            color: status.color().to_string(),
        })
        .collect()
}
