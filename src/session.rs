//! Map session: the page-level controller
//!
//! A session ties the layer collection to a renderer and tracks what the page
//! shows around the map:
//! - A banner message that dismisses itself after a timeout
//! - An info panel with the point count and ordering of the last plot
//! - The initial view and tile layer settings
//!
//! Every UI action maps to one method and runs to completion.

use std::time::Duration;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::{MapConfig, TileLayerConfig};
use crate::coord::CoordFormat;
use crate::example::example_json;
use crate::layer::{Layer, LayerManager, Statistics};
use crate::render::{PathStyle, Renderer};
use crate::writer::{VegaLiteWriter, Writer};
use crate::{GeopathError, Result};

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// A transient banner message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    #[serde(rename = "dismissAfterMs", serialize_with = "serialize_millis")]
    pub dismiss_after: Duration,
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

impl Message {
    /// Whether the message should still be shown `elapsed` after posting
    pub fn is_visible_after(&self, elapsed: Duration) -> bool {
        elapsed < self.dismiss_after
    }
}

/// Summary of the most recent successful plot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoPanel {
    pub point_count: usize,
    pub format: CoordFormat,
    /// `"Lon, Lat"` or `"Lat, Lon"`
    pub format_label: String,
}

/// Result of a successful plot action
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOutcome {
    pub layer: Layer,
    pub statistics: Statistics,
}

/// Page state for one map
pub struct MapSession<R: Renderer> {
    config: MapConfig,
    layers: LayerManager,
    renderer: R,
    message: Option<Message>,
    info_panel: Option<InfoPanel>,
}

impl<R: Renderer> MapSession<R> {
    /// Validate the configuration and show the initial view
    pub fn new(config: MapConfig, mut renderer: R) -> Result<Self> {
        config.validate()?;
        let layers = LayerManager::new(&config)?;
        renderer.set_view(config.initial_center, config.initial_zoom)?;
        Ok(Self {
            config,
            layers,
            renderer,
            message: None,
            info_panel: None,
        })
    }

    /// Plot pasted text as a new layer and bring it into view
    ///
    /// On failure the error is also posted as a banner message.
    pub fn plot(&mut self, raw_input: &str) -> Result<PlotOutcome> {
        match self.try_plot(raw_input) {
            Ok(layer) => {
                self.info_panel = Some(InfoPanel {
                    point_count: layer.point_count(),
                    format: layer.format,
                    format_label: layer.format.label().to_string(),
                });
                self.post(
                    MessageKind::Success,
                    format!(
                        "Successfully plotted path with {} points!",
                        layer.point_count()
                    ),
                );
                Ok(PlotOutcome {
                    layer,
                    statistics: self.layers.statistics(),
                })
            }
            Err(e) => {
                error!("Plot failed: {}", e);
                self.post(MessageKind::Error, e.to_string());
                Err(e)
            }
        }
    }

    fn try_plot(&mut self, raw_input: &str) -> Result<Layer> {
        let layer = self.layers.plot(raw_input)?;
        let style = PathStyle::new(layer.color.clone(), &self.config.path);

        let drawn = self
            .renderer
            .draw_path(layer.id, &layer.points, &style)
            .and_then(|_| self.focus(&layer));
        if let Err(e) = drawn {
            // The layer never became visible: drop it and hand its id and
            // color to the next plot.
            if let Err(cleanup) = self.renderer.remove_path(layer.id) {
                warn!(id = layer.id, "Could not remove partially drawn path: {}", cleanup);
            }
            self.layers.undo_last(layer.id);
            return Err(e);
        }
        Ok(layer)
    }

    /// Fit the map to a layer, or center on it when it is a single point
    fn focus(&mut self, layer: &Layer) -> Result<()> {
        match layer.points.as_slice() {
            [point] => self
                .renderer
                .set_view(*point, self.config.single_point_zoom),
            _ => match layer.bounds() {
                Some(bounds) => self.renderer.fit_bounds(&bounds, self.config.fit_padding),
                None => Ok(()),
            },
        }
    }

    /// Remove one layer from the collection and the map
    ///
    /// The layer stays in the collection when the renderer cannot remove it.
    pub fn remove_layer(&mut self, id: u64) -> Result<Layer> {
        let removed = if self.layers.get(id).is_some() {
            self.renderer
                .remove_path(id)
                .and_then(|_| self.layers.remove(id))
        } else {
            Err(GeopathError::NotFound(id))
        };
        let layer = match removed {
            Ok(layer) => layer,
            Err(e) => {
                error!("Remove failed: {}", e);
                self.post(MessageKind::Error, e.to_string());
                return Err(e);
            }
        };
        if self.layers.is_empty() {
            self.info_panel = None;
        }
        self.post(
            MessageKind::Success,
            format!("Removed layer {} ({} points)", id, layer.point_count()),
        );
        Ok(layer)
    }

    /// Remove every layer, reset ids and colors, hide the info panel
    ///
    /// Layers whose paths the renderer fails to remove are kept, along with
    /// the id/color counter, and the first failure is returned.
    pub fn clear(&mut self) -> Result<()> {
        let ids: Vec<u64> = self.layers.layers().iter().map(|layer| layer.id).collect();
        let mut first_failure = None;
        for id in ids {
            match self.renderer.remove_path(id) {
                Ok(()) => {
                    self.layers.remove(id)?;
                }
                Err(e) => {
                    warn!(id, "Could not remove path: {}", e);
                    first_failure.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_failure {
            if self.layers.is_empty() {
                self.info_panel = None;
            }
            error!("Clear failed: {}", e);
            self.post(MessageKind::Error, e.to_string());
            return Err(e);
        }

        self.layers.clear();
        self.info_panel = None;
        self.post(MessageKind::Success, "Map cleared!".to_string());
        Ok(())
    }

    /// Sample data for the input box
    pub fn load_example(&mut self) -> Result<String> {
        let text = example_json()?;
        self.post(
            MessageKind::Success,
            "Example data loaded! Click \"Plot Coordinates\" to visualize.".to_string(),
        );
        Ok(text)
    }

    /// Vega-Lite document of every current layer
    pub fn export_vegalite(&self) -> Result<String> {
        VegaLiteWriter::with_path_style(self.config.path.clone()).write(self.layers.layers())
    }

    pub fn statistics(&self) -> Statistics {
        self.layers.statistics()
    }

    pub fn layers(&self) -> &[Layer] {
        self.layers.layers()
    }

    /// Latest banner message, regardless of age
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Latest banner message if it has not timed out after `elapsed`
    pub fn message_at(&self, elapsed: Duration) -> Option<&Message> {
        self.message
            .as_ref()
            .filter(|message| message.is_visible_after(elapsed))
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    pub fn info_panel(&self) -> Option<&InfoPanel> {
        self.info_panel.as_ref()
    }

    pub fn tile_layer(&self) -> &TileLayerConfig {
        &self.config.tile_layer
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn post(&mut self, kind: MessageKind, text: String) {
        info!(?kind, "{}", text);
        self.message = Some(Message {
            kind,
            text,
            dismiss_after: Duration::from_millis(self.config.message_timeout_ms),
        });
    }
}
