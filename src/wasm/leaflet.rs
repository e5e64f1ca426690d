//! Leaflet binding
//!
//! The only code that touches the global `L`. Options are serialized with
//! serde and parsed into plain JS objects, so the Rust option structs double
//! as the Leaflet option schema.

use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};

use crate::{
    core::{config::MapOptions, constants::FOCUS_ZOOM, geo::LatLng},
    layers::{marker::MarkerOptions, tile::TileLayerOptions},
    traits::MapLibrary,
    MapError, Result,
};

#[wasm_bindgen(inline_js = r#"
function leaflet() {
    const L = globalThis.L;
    if (typeof L === "undefined") {
        throw new Error("Leaflet is not loaded (globalThis.L is undefined)");
    }
    return L;
}

export function create_map(container_id, lat, lng, zoom, options) {
    const L = leaflet();
    return L.map(container_id, Object.assign({}, options, { center: [lat, lng], zoom: zoom }));
}

export function add_tile_layer(map, url, options) {
    leaflet().tileLayer(url, options).addTo(map);
}

export function add_marker(map, lat, lng, options, focus_zoom) {
    const L = leaflet();
    const marker_options = Object.assign({}, options);
    const focus_on_double_click = marker_options.focusOnDoubleClick;
    delete marker_options.position;
    delete marker_options.focusOnDoubleClick;
    if (marker_options.icon) {
        marker_options.icon = L.icon(marker_options.icon);
    }
    const marker = L.marker([lat, lng], marker_options).addTo(map);
    if (focus_on_double_click) {
        marker.on("dblclick", function () {
            map.setView([lat, lng], focus_zoom);
        });
    }
}

export function set_view(map, lat, lng, zoom) {
    map.setView([lat, lng], zoom);
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn create_map(
        container_id: &str,
        lat: f64,
        lng: f64,
        zoom: f64,
        options: &JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    fn add_tile_layer(map: &JsValue, url: &str, options: &JsValue)
        -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn add_marker(
        map: &JsValue,
        lat: f64,
        lng: f64,
        options: &JsValue,
        focus_zoom: f64,
    ) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn set_view(map: &JsValue, lat: f64, lng: f64, zoom: f64) -> std::result::Result<(), JsValue>;
}

/// A Leaflet `L.Map` instance
#[derive(Debug, Clone)]
pub struct LeafletMap(JsValue);

impl LeafletMap {
    pub fn as_js(&self) -> &JsValue {
        &self.0
    }
}

/// [`MapLibrary`] backed by the page's Leaflet
#[derive(Debug, Clone, Copy, Default)]
pub struct Leaflet;

impl Leaflet {
    fn container_exists(container_id: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(container_id))
            .is_some()
    }
}

impl MapLibrary for Leaflet {
    type Map = LeafletMap;

    fn create_map(
        &self,
        container_id: &str,
        center: LatLng,
        zoom: f64,
        options: &MapOptions,
    ) -> Result<Self::Map> {
        if !Self::container_exists(container_id) {
            return Err(MapError::ContainerNotFound(container_id.to_string()));
        }
        let options = to_js(options)?;
        create_map(container_id, center.lat, center.lng, zoom, &options)
            .map(LeafletMap)
            .map_err(library_error)
    }

    fn add_tile_layer(&self, map: &Self::Map, options: &TileLayerOptions) -> Result<()> {
        let js_options = to_js(options)?;
        add_tile_layer(&map.0, &options.url_template, &js_options).map_err(library_error)
    }

    fn add_marker(&self, map: &Self::Map, marker: &MarkerOptions) -> Result<()> {
        let options = to_js(marker)?;
        add_marker(
            &map.0,
            marker.position.lat,
            marker.position.lng,
            &options,
            FOCUS_ZOOM,
        )
        .map_err(library_error)
    }

    fn set_view(&self, map: &Self::Map, center: LatLng, zoom: f64) -> Result<()> {
        set_view(&map.0, center.lat, center.lng, zoom).map_err(library_error)
    }
}

/// Serialize through JSON into a plain JS object
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(library_error)
}

/// Message of a thrown JS value
pub(crate) fn library_error(error: JsValue) -> MapError {
    let message = match error.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => error
            .as_string()
            .unwrap_or_else(|| format!("{error:?}")),
    };
    MapError::Library(message)
}
