//! JavaScript entry points
//!
//! ```js
//! import init, { showMap } from "./pkg/mapview.js";
//! await init();
//! showMap(apiKey, 51.5074, -0.1278);
//! ```
//!
//! Failures are thrown as JS `Error`s whose `name` identifies the cause
//! (`InvalidCoordinateError`, `ContainerNotFoundError`, ...).

pub mod leaflet;

use once_cell::sync::OnceCell;
use wasm_bindgen::prelude::*;

use crate::{
    core::{config::MapViewConfig, geo::LatLng, map::MapView, request::MapRequest},
    layers::marker::{IconOptions, MarkerOptions},
    MapError,
};
use leaflet::Leaflet;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the console logger and panic hook once
pub fn init() {
    INITIALIZED.get_or_init(|| {
        wasm_logger::init(
            wasm_logger::Config::new(log::Level::Info).module_prefix(env!("CARGO_PKG_NAME")),
        );
        console_error_panic_hook::set_once();
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    init();
}

/// Show the default map in `#mapid`, centred on the coordinate with one marker.
#[wasm_bindgen(js_name = showMap)]
pub fn show_map(api_key: &str, latitude: f64, longitude: f64) -> Result<(), JsValue> {
    init();
    crate::core::map::show_map(Leaflet, api_key, latitude, longitude)
        .map(|_| ())
        .map_err(to_js_error)
}

/// Show a map with a JSON-shaped config (see `MapViewConfig`). `null` or
/// `undefined` selects the defaults. Returns a handle for further markers and
/// re-centring.
#[wasm_bindgen(js_name = showMapWithConfig)]
pub fn show_map_with_config(
    config: JsValue,
    api_key: &str,
    latitude: f64,
    longitude: f64,
) -> Result<MapHandle, JsValue> {
    init();
    let config = parse_config(&config).map_err(to_js_error)?;
    let request = MapRequest::new(api_key, latitude, longitude);
    MapView::show(Leaflet, &config, &request)
        .map(|view| MapHandle { view })
        .map_err(to_js_error)
}

fn parse_config(config: &JsValue) -> crate::Result<MapViewConfig> {
    if config.is_null() || config.is_undefined() {
        return Ok(MapViewConfig::default());
    }
    // Functions and symbols stringify to `undefined`
    let json = js_sys::JSON::stringify(config)
        .map_err(leaflet::library_error)?
        .as_string()
        .ok_or_else(|| MapError::Config("config is not a JSON value".into()))?;
    MapViewConfig::from_json(&json)
}

/// A shown map, as seen from JavaScript
#[wasm_bindgen]
pub struct MapHandle {
    view: MapView<Leaflet>,
}

#[wasm_bindgen]
impl MapHandle {
    /// Add a marker; `highlighted` switches to the red icon. Double-clicking
    /// the marker zooms in on it.
    #[wasm_bindgen(js_name = addMarker)]
    pub fn add_marker(
        &mut self,
        latitude: f64,
        longitude: f64,
        title: Option<String>,
        highlighted: bool,
    ) -> Result<(), JsValue> {
        let mut marker = MarkerOptions::new(LatLng::new(latitude, longitude));
        if let Some(title) = title {
            marker = marker.with_alt(title.clone()).with_title(title);
        }
        if highlighted {
            marker = marker.with_icon(IconOptions::highlighted());
        }
        marker = marker.with_focus_on_double_click(true);
        self.view.add_marker(&marker).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setView)]
    pub fn set_view(&mut self, latitude: f64, longitude: f64, zoom: f64) -> Result<(), JsValue> {
        self.view
            .set_view(LatLng::new(latitude, longitude), zoom)
            .map_err(to_js_error)
    }

    /// Re-centre on a point at the close-up zoom
    pub fn focus(&mut self, latitude: f64, longitude: f64) -> Result<(), JsValue> {
        self.view
            .focus(LatLng::new(latitude, longitude))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn latitude(&self) -> f64 {
        self.view.center().lat
    }

    #[wasm_bindgen(getter)]
    pub fn longitude(&self) -> f64 {
        self.view.center().lng
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.view.zoom()
    }

    #[wasm_bindgen(getter, js_name = markerCount)]
    pub fn marker_count(&self) -> usize {
        self.view.marker_count()
    }
}

/// JS `Error.name` for each failure
pub fn error_name(error: &MapError) -> &'static str {
    match error {
        MapError::InvalidCoordinates(_) => "InvalidCoordinateError",
        MapError::MissingApiKey => "MissingApiKeyError",
        MapError::ContainerNotFound(_) => "ContainerNotFoundError",
        MapError::Template(_) => "TemplateError",
        MapError::Library(_) => "MapLibraryError",
        MapError::Config(_) | MapError::Serialization(_) => "ConfigError",
    }
}

fn to_js_error(error: MapError) -> JsValue {
    let js_error = js_sys::Error::new(&error.to_string());
    js_error.set_name(error_name(&error));
    js_error.into()
}
