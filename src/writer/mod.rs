//! Static export of plotted layers
//!
//! Writers turn the current layers into a self-contained document that can be
//! rendered without the live map.

mod vegalite;

pub use vegalite::VegaLiteWriter;

use crate::layer::Layer;
use crate::Result;

/// Trait for layer output formats
pub trait Writer {
    /// Output type produced by the writer
    type Output;

    /// Render the layers in creation order
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for inputs the format cannot represent
    /// and `WriterError` if serialization fails.
    fn write(&self, layers: &[Layer]) -> Result<Self::Output>;
}
