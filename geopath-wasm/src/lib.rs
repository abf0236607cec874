//! WebAssembly bindings for geopath
//!
//! The page creates a [`GeopathMap`] around a JavaScript map backend object
//! that draws with its mapping library of choice:
//!
//! ```js
//! const backend = {
//!   drawPath(id, points, style) { paths.set(id, L.polyline(points, style).addTo(map)); },
//!   removePath(id) { paths.get(id)?.remove(); paths.delete(id); },
//!   fitBounds(bounds, padding) { map.fitBounds(bounds, { padding }); },
//!   setView(center, zoom) { map.setView(center, zoom); },
//! };
//! const geopath = new GeopathMap(backend, { palette: "trail" });
//! geopath.plot(textarea.value);
//! ```

mod logging;
mod renderer;

use geopath::{GeopathError, MapConfig, MapSession};
use gloo_utils::format::JsValueSerdeExt;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use renderer::{JsRenderer, MapBackend};

pub fn set_panic_hook() {
    // Route Rust panics to console.error with a readable message.
    console_error_panic_hook::set_once();
}

/// Install console logging. `filter` uses `EnvFilter` directive syntax and
/// defaults to `geopath=info,geopath_wasm=info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(filter: Option<String>) -> Result<(), JsError> {
    set_panic_hook();
    logging::init(filter.as_deref()).map_err(|e| JsError::new(&e))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlotResult<'a> {
    layer: geopath::LayerSummary,
    skipped: usize,
    statistics: &'a geopath::Statistics,
}

/// A map page backed by a JavaScript renderer
#[wasm_bindgen]
pub struct GeopathMap {
    session: MapSession<JsRenderer>,
}

#[wasm_bindgen]
impl GeopathMap {
    /// Create a session. `config` is a plain object (or undefined for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(backend: MapBackend, config: JsValue) -> Result<GeopathMap, JsError> {
        set_panic_hook();
        let config: MapConfig = if config.is_undefined() || config.is_null() {
            MapConfig::default()
        } else {
            config
                .into_serde()
                .map_err(|e| JsError::new(&format!("Invalid configuration: {}", e)))?
        };
        let session = MapSession::new(config, JsRenderer::new(backend)).map_err(to_js_error)?;
        tracing::info!("geopath {} session started", geopath::VERSION);
        Ok(GeopathMap { session })
    }

    /// Plot pasted JSON text as a new layer
    ///
    /// Returns `{ layer, skipped, statistics }`.
    pub fn plot(&mut self, input: &str) -> Result<JsValue, JsError> {
        let outcome = self.session.plot(input).map_err(to_js_error)?;
        to_js(&PlotResult {
            layer: outcome.layer.summary(),
            skipped: outcome.layer.skipped,
            statistics: &outcome.statistics,
        })
    }

    #[wasm_bindgen(js_name = removeLayer)]
    pub fn remove_layer(&mut self, id: u32) -> Result<JsValue, JsError> {
        self.session.remove_layer(u64::from(id)).map_err(to_js_error)?;
        to_js(&self.session.statistics())
    }

    pub fn clear(&mut self) -> Result<(), JsError> {
        self.session.clear().map_err(to_js_error)
    }

    /// Sample track as pretty JSON for the input box
    #[wasm_bindgen(js_name = loadExample)]
    pub fn load_example(&mut self) -> Result<String, JsError> {
        self.session.load_example().map_err(to_js_error)
    }

    pub fn statistics(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.statistics())
    }

    /// `{ pointCount, format, formatLabel }`, or null when nothing is plotted
    #[wasm_bindgen(js_name = infoPanel)]
    pub fn info_panel(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.info_panel())
    }

    /// `{ kind, text, dismissAfterMs }`, or null
    pub fn message(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.message())
    }

    #[wasm_bindgen(js_name = dismissMessage)]
    pub fn dismiss_message(&mut self) {
        self.session.dismiss_message();
    }

    /// `{ url, attribution }` for the background tile layer
    #[wasm_bindgen(js_name = tileLayer)]
    pub fn tile_layer(&self) -> Result<JsValue, JsError> {
        to_js(self.session.tile_layer())
    }

    #[wasm_bindgen(js_name = exportVegaLite)]
    pub fn export_vegalite(&self) -> Result<String, JsError> {
        self.session.export_vegalite().map_err(to_js_error)
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    JsValue::from_serde(value).map_err(|e| JsError::new(&format!("Serialization failed: {}", e)))
}

fn to_js_error(err: GeopathError) -> JsError {
    JsError::new(&err.to_string())
}
