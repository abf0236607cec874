//! In-memory renderer that records every call

use std::collections::BTreeMap;

use super::{PathStyle, Renderer};
use crate::coord::{LatLng, LatLngBounds};
use crate::Result;

/// One call made against a [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    DrawPath {
        id: u64,
        points: Vec<LatLng>,
        style: PathStyle,
    },
    RemovePath {
        id: u64,
    },
    FitBounds {
        bounds: LatLngBounds,
        padding: [u32; 2],
    },
    SetView {
        center: LatLng,
        zoom: u8,
    },
}

/// Renderer that keeps a command log and the set of visible paths
///
/// Used headless and in tests; nothing is drawn.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
    visible: BTreeMap<u64, PathStyle>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in order
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<&RenderCommand> {
        self.commands.last()
    }

    /// Ids of paths drawn and not yet removed, ascending
    pub fn visible_paths(&self) -> Vec<u64> {
        self.visible.keys().copied().collect()
    }

    pub fn style_of(&self, id: u64) -> Option<&PathStyle> {
        self.visible.get(&id)
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_path(&mut self, id: u64, points: &[LatLng], style: &PathStyle) -> Result<()> {
        self.visible.insert(id, style.clone());
        self.commands.push(RenderCommand::DrawPath {
            id,
            points: points.to_vec(),
            style: style.clone(),
        });
        Ok(())
    }

    fn remove_path(&mut self, id: u64) -> Result<()> {
        self.visible.remove(&id);
        self.commands.push(RenderCommand::RemovePath { id });
        Ok(())
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: [u32; 2]) -> Result<()> {
        self.commands.push(RenderCommand::FitBounds {
            bounds: *bounds,
            padding,
        });
        Ok(())
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<()> {
        self.commands.push(RenderCommand::SetView { center, zoom });
        Ok(())
    }
}
