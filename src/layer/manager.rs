//! Layer storage and the plot pipeline

use tracing::{info, warn};

use super::{palette, Layer, Statistics};
use crate::config::MapConfig;
use crate::coord::{detect_format, RawPair};
use crate::validate::parse_coordinates;
use crate::{GeopathError, Result};

/// Owns the current layers and the id/color counter
#[derive(Debug, Clone)]
pub struct LayerManager {
    layers: Vec<Layer>,
    /// Number of layers created since the last reset
    created: u64,
    palette: Vec<String>,
}

impl LayerManager {
    /// Create an empty manager using the configured palette
    pub fn new(config: &MapConfig) -> Result<Self> {
        Ok(Self::with_palette(config.resolve_palette()?))
    }

    /// Create an empty manager with explicit hex colors
    ///
    /// An empty list falls back to the default palette.
    pub fn with_palette(colors: Vec<String>) -> Self {
        let palette = if colors.is_empty() {
            palette::default_palette()
                .iter()
                .map(|c| c.to_string())
                .collect()
        } else {
            colors
        };
        Self {
            layers: Vec::new(),
            created: 0,
            palette,
        }
    }

    /// Parse, validate and plot pasted JSON text as a new layer
    ///
    /// # Errors
    ///
    /// - `EmptyInput`, `ParseError` or `StructuralError` from validation
    /// - `EmptyResult` if no pair falls inside geographic ranges
    pub fn plot(&mut self, raw_input: &str) -> Result<Layer> {
        let pairs = parse_coordinates(raw_input)?;
        self.plot_pairs(&pairs)
    }

    /// Plot already-validated pairs as a new layer
    ///
    /// Pairs that resolve outside geographic ranges are skipped with a
    /// warning; the rest of the layer is kept.
    pub fn plot_pairs(&mut self, pairs: &[RawPair]) -> Result<Layer> {
        if pairs.is_empty() {
            return Err(GeopathError::StructuralError { index: None });
        }

        let format = detect_format(pairs);
        let mut points = Vec::with_capacity(pairs.len());
        for (index, pair) in pairs.iter().enumerate() {
            let point = pair.resolve(format);
            if point.is_valid() {
                points.push(point);
            } else {
                warn!(
                    index,
                    lat = point.lat,
                    lng = point.lng,
                    "Invalid coordinate at index {}: [{}, {}]",
                    index,
                    point.lat,
                    point.lng
                );
            }
        }

        if points.is_empty() {
            return Err(GeopathError::EmptyResult);
        }

        let skipped = pairs.len() - points.len();
        let layer = Layer {
            id: self.created + 1,
            points,
            color: palette::color_for(self.palette.as_slice(), self.created).to_string(),
            format,
            skipped,
        };
        self.created += 1;

        info!(
            id = layer.id,
            points = layer.point_count(),
            skipped,
            %format,
            "Plotted layer"
        );
        self.layers.push(layer.clone());
        Ok(layer)
    }

    /// Remove a layer by id, returning it
    ///
    /// Unknown ids fail with `NotFound` and leave state untouched.
    pub fn remove(&mut self, id: u64) -> Result<Layer> {
        let position = self
            .layers
            .iter()
            .position(|layer| layer.id == id)
            .ok_or(GeopathError::NotFound(id))?;
        let layer = self.layers.remove(position);
        info!(id, "Removed layer");
        Ok(layer)
    }

    /// Take back the most recent plot, rewinding the id/color counter
    ///
    /// Only succeeds while `id` is still the newest layer, so ids handed out
    /// after it are never reissued.
    pub fn undo_last(&mut self, id: u64) -> Option<Layer> {
        if id != self.created || self.layers.last().map(|layer| layer.id) != Some(id) {
            return None;
        }
        let layer = self.layers.pop()?;
        self.created -= 1;
        info!(id, "Rolled back layer");
        Some(layer)
    }

    /// Drop every layer and restart ids and colors from the beginning
    pub fn clear(&mut self) {
        let count = self.layers.len();
        self.layers.clear();
        self.created = 0;
        info!(count, "Cleared layers");
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            layer_count: self.layers.len(),
            total_points: self.layers.iter().map(Layer::point_count).sum(),
            layers: self.layers.iter().map(Layer::summary).collect(),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn get(&self, id: u64) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::with_palette(Vec::new())
    }
}
