use geopath::coord::{LatLng, LatLngBounds};
use geopath::render::{PathStyle, Renderer};
use geopath::{GeopathError, Result};
use gloo_utils::format::JsValueSerdeExt;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Map object supplied by the page
    pub type MapBackend;

    #[wasm_bindgen(method, catch, js_name = drawPath)]
    fn draw_path(this: &MapBackend, id: f64, points: JsValue, style: JsValue)
        -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removePath)]
    fn remove_path(this: &MapBackend, id: f64) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = fitBounds)]
    fn fit_bounds(this: &MapBackend, bounds: JsValue, padding: JsValue)
        -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setView)]
    fn set_view(this: &MapBackend, center: JsValue, zoom: u8) -> std::result::Result<(), JsValue>;
}

/// Leaflet-style path options
#[derive(Serialize)]
struct JsPathStyle<'a> {
    color: &'a str,
    weight: f64,
    opacity: f64,
}

/// [`Renderer`] forwarding every call to a JavaScript [`MapBackend`]
///
/// Points are passed as `[lat, lng]` arrays and bounds as
/// `[[south, west], [north, east]]`, the shapes Leaflet accepts directly.
pub struct JsRenderer {
    backend: MapBackend,
}

impl JsRenderer {
    pub fn new(backend: MapBackend) -> Self {
        Self { backend }
    }
}

impl Renderer for JsRenderer {
    fn draw_path(&mut self, id: u64, points: &[LatLng], style: &PathStyle) -> Result<()> {
        let points = serialize(points)?;
        let style = serialize(&JsPathStyle {
            color: &style.color,
            weight: style.weight,
            opacity: style.opacity,
        })?;
        self.backend
            .draw_path(id as f64, points, style)
            .map_err(|e| js_failure("drawPath", e))
    }

    fn remove_path(&mut self, id: u64) -> Result<()> {
        self.backend
            .remove_path(id as f64)
            .map_err(|e| js_failure("removePath", e))
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: [u32; 2]) -> Result<()> {
        let corners = serialize(&[bounds.south_west, bounds.north_east])?;
        let padding = serialize(&padding)?;
        self.backend
            .fit_bounds(corners, padding)
            .map_err(|e| js_failure("fitBounds", e))
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<()> {
        let center = serialize(&center)?;
        self.backend
            .set_view(center, zoom)
            .map_err(|e| js_failure("setView", e))
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    JsValue::from_serde(value).map_err(|e| GeopathError::RenderError(e.to_string()))
}

fn js_failure(method: &str, err: JsValue) -> GeopathError {
    // Thrown values are usually `Error` objects, sometimes bare strings.
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown JavaScript error".to_string());
    GeopathError::RenderError(format!("{} failed: {}", method, detail))
}
