//! Map rendering abstraction
//!
//! geopath does not draw anything itself. A map backend (Leaflet in the
//! browser, a test double in unit tests) implements [`Renderer`] and receives
//! calls as layers come and go.
//!
//! # Example
//!
//! ```rust,ignore
//! use geopath::render::{RecordingRenderer, RenderCommand};
//! use geopath::{MapConfig, MapSession};
//!
//! let mut session = MapSession::new(MapConfig::default(), RecordingRenderer::new())?;
//! session.plot("[[40.88, -122.54], [40.87, -122.53]]")?;
//! assert!(matches!(session.renderer().commands()[1], RenderCommand::DrawPath { .. }));
//! ```

mod recording;

pub use recording::{RecordingRenderer, RenderCommand};

use serde::{Deserialize, Serialize};

use crate::config::PathConfig;
use crate::coord::{LatLng, LatLngBounds};
use crate::Result;

/// Stroke style for a drawn path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

impl PathStyle {
    pub fn new(color: impl Into<String>, path: &PathConfig) -> Self {
        Self {
            color: color.into(),
            weight: path.weight,
            opacity: path.opacity,
        }
    }
}

/// Capabilities the session needs from a map
///
/// Paths are addressed by layer id, so a backend keeps its own id to
/// drawn-object mapping.
pub trait Renderer {
    /// Draw a connected path through `points`
    fn draw_path(&mut self, id: u64, points: &[LatLng], style: &PathStyle) -> Result<()>;

    /// Remove a previously drawn path. Unknown ids are ignored.
    fn remove_path(&mut self, id: u64) -> Result<()>;

    /// Zoom and pan so `bounds` is fully visible, with pixel padding `[x, y]`
    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: [u32; 2]) -> Result<()>;

    /// Center the map on `center` at `zoom`
    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw_path(&mut self, id: u64, points: &[LatLng], style: &PathStyle) -> Result<()> {
        (**self).draw_path(id, points, style)
    }

    fn remove_path(&mut self, id: u64) -> Result<()> {
        (**self).remove_path(id)
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: [u32; 2]) -> Result<()> {
        (**self).fit_bounds(bounds, padding)
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<()> {
        (**self).set_view(center, zoom)
    }
}
