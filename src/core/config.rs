//! Configuration for how a map view is shown
//!
//! Everything a host page may want to tune lives in [`MapViewConfig`]: the
//! container id, the initial zoom, Leaflet map options, the tile layer and
//! the marker icon. The defaults reproduce the Thunderforest atlas map at
//! zoom 16 in `#mapid`. Configs can be built in Rust (see
//! [`crate::core::builder::MapViewBuilder`]) or parsed from JSON handed over
//! by JavaScript.

use serde::{Deserialize, Serialize};

use crate::{
    core::constants::{DEFAULT_CONTAINER_ID, DEFAULT_ZOOM, DEFAULT_ZOOM_DELTA},
    layers::{marker::IconOptions, tile::TileLayerOptions},
    MapError, Result,
};

/// Leaflet `L.map` interaction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapOptions {
    pub dragging: bool,
    pub scroll_wheel_zoom: bool,
    pub double_click_zoom: bool,
    pub zoom_control: bool,
    pub attribution_control: bool,
    pub zoom_delta: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            dragging: true,
            scroll_wheel_zoom: true,
            double_click_zoom: true,
            zoom_control: true,
            attribution_control: true,
            zoom_delta: DEFAULT_ZOOM_DELTA,
            min_zoom: None,
            max_zoom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapViewConfig {
    pub container_id: String,
    pub zoom: f64,
    pub map_options: MapOptions,
    pub tile_layer: TileLayerOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_icon: Option<IconOptions>,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self::thunderforest()
    }
}

impl MapViewConfig {
    pub fn thunderforest() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            zoom: DEFAULT_ZOOM,
            map_options: MapOptions::default(),
            tile_layer: TileLayerOptions::thunderforest(),
            marker_icon: None,
        }
    }

    pub fn openstreetmap() -> Self {
        Self {
            tile_layer: TileLayerOptions::openstreetmap(),
            ..Self::thunderforest()
        }
    }

    /// Parse a (possibly partial) JSON config; missing fields take the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Highest zoom the map may be set to: the tighter of the map and tile limits
    pub fn max_zoom(&self) -> f64 {
        let tile_max = self.tile_layer.max_zoom as f64;
        self.map_options
            .max_zoom
            .map_or(tile_max, |max| max.min(tile_max))
    }

    pub fn min_zoom(&self) -> f64 {
        let tile_min = self.tile_layer.min_zoom as f64;
        self.map_options
            .min_zoom
            .map_or(tile_min, |min| min.max(tile_min))
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom(), self.max_zoom())
    }

    pub fn validate(&self) -> Result<()> {
        if self.container_id.trim().is_empty() {
            return Err(MapError::Config("container id is empty".into()));
        }
        self.tile_layer.validate()?;

        if self.min_zoom() > self.max_zoom() {
            return Err(MapError::Config(format!(
                "zoom range [{}, {}] is empty",
                self.min_zoom(),
                self.max_zoom()
            )));
        }
        if !(self.min_zoom()..=self.max_zoom()).contains(&self.zoom) {
            return Err(MapError::Config(format!(
                "initial zoom {} is outside [{}, {}]",
                self.zoom,
                self.min_zoom(),
                self.max_zoom()
            )));
        }
        let delta = self.map_options.zoom_delta;
        if !(delta.is_finite() && delta > 0.0) {
            return Err(MapError::Config("zoom delta must be a positive number".into()));
        }
        Ok(())
    }
}
