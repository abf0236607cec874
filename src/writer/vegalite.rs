//! Vega-Lite JSON writer
//!
//! Each layer becomes one `line` mark drawn in geographic coordinates.
//!
//! # Mapping Strategy
//!
//! - Layer -> Vega-Lite layer with inline data
//! - Point index -> `order` channel, so the path keeps input order
//! - Layer color/weight/opacity -> constant mark properties
//!
//! ```rust,ignore
//! use geopath::writer::{VegaLiteWriter, Writer};
//!
//! let json = VegaLiteWriter::new().write(manager.layers())?;
//! // Render in a browser with vega-embed
//! ```

use serde_json::{json, Value};

use super::Writer;
use crate::config::PathConfig;
use crate::layer::Layer;
use crate::{GeopathError, Result};

/// Vega-Lite JSON writer
pub struct VegaLiteWriter {
    /// Vega-Lite schema version
    schema: String,
    path: PathConfig,
}

impl VegaLiteWriter {
    /// Create a writer with the default stroke settings
    pub fn new() -> Self {
        Self::with_path_style(PathConfig::default())
    }

    pub fn with_path_style(path: PathConfig) -> Self {
        Self {
            schema: "https://vega.github.io/schema/vega-lite/v6.json".to_string(),
            path,
        }
    }

    fn layer_spec(&self, layer: &Layer) -> Value {
        let values: Vec<Value> = layer
            .points
            .iter()
            .enumerate()
            .map(|(order, point)| {
                json!({
                    "layer": layer.id,
                    "order": order,
                    "latitude": point.lat,
                    "longitude": point.lng,
                })
            })
            .collect();

        json!({
            "name": format!("layer_{}", layer.id),
            "data": { "values": values },
            "mark": {
                "type": "line",
                "color": layer.color,
                "strokeWidth": self.path.weight,
                "opacity": self.path.opacity,
            },
            "encoding": {
                "longitude": { "field": "longitude", "type": "quantitative" },
                "latitude": { "field": "latitude", "type": "quantitative" },
                "order": { "field": "order", "type": "ordinal" },
            },
        })
    }
}

impl Default for VegaLiteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for VegaLiteWriter {
    type Output = String;

    fn write(&self, layers: &[Layer]) -> Result<String> {
        if layers.is_empty() {
            return Err(GeopathError::ValidationError(
                "VegaLiteWriter requires at least one layer".to_string(),
            ));
        }

        let vl_spec = json!({
            "$schema": self.schema,
            "width": "container",
            "height": "container",
            "projection": { "type": "mercator" },
            "layer": layers.iter().map(|layer| self.layer_spec(layer)).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&vl_spec).map_err(|e| {
            GeopathError::WriterError(format!("Failed to serialize Vega-Lite JSON: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerManager;

    fn two_layers() -> Vec<Layer> {
        let mut manager = LayerManager::default();
        manager.plot("[[-122.5, 40.8], [-122.4, 40.9]]").unwrap();
        manager.plot("[[10, 20]]").unwrap();
        manager.layers().to_vec()
    }

    #[test]
    fn test_write_layers() {
        let output = VegaLiteWriter::new().write(&two_layers()).unwrap();
        let spec: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            spec["$schema"],
            "https://vega.github.io/schema/vega-lite/v6.json"
        );
        assert_eq!(spec["projection"]["type"], "mercator");

        let layers = spec["layer"].as_array().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0]["name"], "layer_1");
        assert_eq!(layers[0]["mark"]["type"], "line");
        assert_eq!(layers[0]["mark"]["color"], "#00ff00");
        assert_eq!(layers[0]["mark"]["strokeWidth"], 2.0);
        assert_eq!(layers[0]["encoding"]["order"]["field"], "order");

        let values = layers[0]["data"]["values"].as_array().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1]["order"], 1);
        assert_eq!(values[1]["latitude"], 40.9);
        assert_eq!(values[1]["longitude"], -122.4);
    }

    #[test]
    fn test_custom_path_style() {
        let writer = VegaLiteWriter::with_path_style(PathConfig {
            weight: 4.0,
            opacity: 0.5,
        });
        let spec: Value = serde_json::from_str(&writer.write(&two_layers()).unwrap()).unwrap();
        assert_eq!(spec["layer"][1]["mark"]["strokeWidth"], 4.0);
        assert_eq!(spec["layer"][1]["mark"]["opacity"], 0.5);
    }

    #[test]
    fn test_write_requires_layers() {
        let err = VegaLiteWriter::new().write(&[]).unwrap_err();
        assert!(matches!(err, GeopathError::ValidationError(_)));
    }
}
