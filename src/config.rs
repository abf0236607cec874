//! Map and layer configuration
//!
//! Every field has a default matching the stock page (Esri imagery centered on
//! the example track), so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::coord::LatLng;
use crate::layer::palette;
use crate::{GeopathError, Result};

/// Highest zoom level accepted for views
pub const MAX_ZOOM: u8 = 22;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// View shown before anything is plotted
    pub initial_center: LatLng,
    pub initial_zoom: u8,
    /// Zoom used when a layer has a single point and bounds cannot be fitted
    pub single_point_zoom: u8,
    /// Padding in pixels `[x, y]` applied when fitting a layer's bounds
    pub fit_padding: [u32; 2],
    pub path: PathConfig,
    pub palette: PaletteSpec,
    /// How long banner messages stay visible
    pub message_timeout_ms: u64,
    pub tile_layer: TileLayerConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_center: LatLng::new(40.8797, -122.5413),
            initial_zoom: 13,
            single_point_zoom: 15,
            fit_padding: [10, 10],
            path: PathConfig::default(),
            palette: PaletteSpec::default(),
            message_timeout_ms: 5000,
            tile_layer: TileLayerConfig::default(),
        }
    }
}

impl MapConfig {
    /// Parse a JSON configuration document and validate it
    pub fn from_json(text: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(text)
            .map_err(|e| GeopathError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and resolve the palette once
    pub fn validate(&self) -> Result<()> {
        if !self.initial_center.is_valid() {
            return Err(GeopathError::ConfigError(format!(
                "initial_center [{}, {}] is outside geographic range",
                self.initial_center.lat, self.initial_center.lng
            )));
        }
        for (name, zoom) in [
            ("initial_zoom", self.initial_zoom),
            ("single_point_zoom", self.single_point_zoom),
        ] {
            if zoom > MAX_ZOOM {
                return Err(GeopathError::ConfigError(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_ZOOM, zoom
                )));
            }
        }
        self.path.validate()?;
        self.resolve_palette()?;
        Ok(())
    }

    /// Expand the palette setting into normalized hex colors
    pub fn resolve_palette(&self) -> Result<Vec<String>> {
        self.palette.resolve()
    }
}

/// Stroke settings shared by every drawn layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathConfig {
    pub weight: f64,
    pub opacity: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            weight: 2.0,
            opacity: 0.8,
        }
    }
}

impl PathConfig {
    fn validate(&self) -> Result<()> {
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(GeopathError::ConfigError(format!(
                "path.weight must be positive, got {}",
                self.weight
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(GeopathError::ConfigError(format!(
                "path.opacity must be within [0, 1], got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

/// Layer colors: a named palette or an explicit list of CSS colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Named(String),
    Colors(Vec<String>),
}

impl Default for PaletteSpec {
    fn default() -> Self {
        PaletteSpec::Named(palette::DEFAULT_PALETTE.to_string())
    }
}

impl PaletteSpec {
    pub fn resolve(&self) -> Result<Vec<String>> {
        let colors: Vec<&str> = match self {
            PaletteSpec::Named(name) => palette::get_palette(name)
                .ok_or_else(|| {
                    GeopathError::ConfigError(format!(
                        "Unknown palette '{}'. Available: {}",
                        name,
                        palette::PALETTE_NAMES.join(", ")
                    ))
                })?
                .to_vec(),
            PaletteSpec::Colors(colors) => colors.iter().map(String::as_str).collect(),
        };

        if colors.is_empty() {
            return Err(GeopathError::ConfigError(
                "Palette must contain at least one color".to_string(),
            ));
        }

        colors
            .into_iter()
            .map(|c| palette::normalize_color(c).map_err(GeopathError::ConfigError))
            .collect()
    }
}

/// Background tile source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileLayerConfig {
    /// URL template with `{z}`, `{x}` and `{y}` placeholders
    pub url: String,
    pub attribution: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}".to_string(),
            attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community".to_string(),
        }
    }
}
