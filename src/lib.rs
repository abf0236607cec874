/*!
# geopath - coordinate paths on a tile map

geopath takes pasted JSON coordinate arrays, works out whether each pair is
`[lon, lat]` or `[lat, lon]`, and keeps the result as colored path layers that
a map renderer draws.

## Example

```rust,ignore
use geopath::{LayerManager, MapConfig};

let mut manager = LayerManager::new(&MapConfig::default())?;
let layer = manager.plot("[[-122.54, 40.87], [-122.53, 40.88]]")?;
assert_eq!(layer.point_count(), 2);
```

## Architecture

- `coord` - coordinate types and format detection
- `validate` - JSON parsing and structural validation
- `layer` - layer storage, palettes and statistics
- `render` - renderer trait the map backend implements
- `writer` - static export of layers (Vega-Lite)
- `session` - UI-level controller tying layers to a renderer
*/

pub mod config;
pub mod coord;
pub mod example;
pub mod layer;
pub mod render;
pub mod session;
pub mod validate;
pub mod writer;

pub use config::MapConfig;
pub use coord::{detect_format, CoordFormat, LatLng, LatLngBounds, RawPair};
pub use layer::{Layer, LayerManager, LayerSummary, Statistics};
pub use render::{PathStyle, Renderer};
pub use session::MapSession;

/// Version of the geopath crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main error type for geopath operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeopathError {
    #[error("Please enter coordinate data.")]
    EmptyInput,

    #[error("Error parsing JSON: {0}")]
    ParseError(String),

    #[error("{}", structural_message(.index))]
    StructuralError { index: Option<usize> },

    #[error("No valid coordinates found.")]
    EmptyResult,

    #[error("No layer with id {0}")]
    NotFound(u64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Output generation error: {0}")]
    WriterError(String),
}

fn structural_message(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(
            "Invalid coordinate at index {}. Each coordinate must be an array of [x, y].",
            i
        ),
        None => "Invalid format. Please enter an array of coordinates.".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, GeopathError>;
