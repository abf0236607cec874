//! Plotted path layers
//!
//! A [`Layer`] is one successfully plotted path: its resolved points, the
//! ordering that was detected, and the color it was assigned. The
//! [`LayerManager`] owns all current layers and the counter that hands out ids
//! and colors.

mod manager;
pub mod palette;

pub use manager::LayerManager;

use serde::Serialize;

use crate::coord::{CoordFormat, LatLng, LatLngBounds};

/// A plotted path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    /// Unique id, assigned in creation order starting at 1
    pub id: u64,
    /// Resolved points in input order; never empty
    pub points: Vec<LatLng>,
    /// Stroke color as hex
    pub color: String,
    /// Ordering detected for the input
    pub format: CoordFormat,
    /// Input pairs dropped for falling outside geographic ranges
    pub skipped: usize,
}

impl Layer {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.points)
    }

    pub fn summary(&self) -> LayerSummary {
        LayerSummary {
            id: self.id,
            color: self.color.clone(),
            point_count: self.point_count(),
            format: self.format,
        }
    }
}

/// Per-layer line of the statistics display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSummary {
    pub id: u64,
    pub color: String,
    pub point_count: usize,
    pub format: CoordFormat,
}

/// Aggregate over every current layer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub layer_count: usize,
    pub total_points: usize,
    /// In creation order
    pub layers: Vec<LayerSummary>,
}
