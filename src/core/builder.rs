//! Map view builder for fluent configuration
//!
//! Collects container, zoom, map options, tile layer and marker icon into a
//! validated [`MapViewConfig`], or shows the map directly.

use crate::{
    core::{
        config::{MapOptions, MapViewConfig},
        map::MapView,
        request::MapRequest,
    },
    layers::{marker::IconOptions, tile::TileLayerOptions},
    traits::MapLibrary,
    Result,
};

/// Builder for creating and configuring map views
#[derive(Debug, Clone, Default)]
pub struct MapViewBuilder {
    config: MapViewConfig,
}

impl MapViewBuilder {
    /// Create a new builder with the default (Thunderforest) settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config
    pub fn from_config(config: MapViewConfig) -> Self {
        Self { config }
    }

    /// Render into the element with this id instead of `mapid`
    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.config.container_id = container_id.into();
        self
    }

    /// Set the initial zoom level
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.config.zoom = zoom;
        self
    }

    /// Set map interaction options
    pub fn with_map_options(mut self, options: MapOptions) -> Self {
        self.config.map_options = options;
        self
    }

    /// Set zoom limits
    pub fn with_zoom_limits(mut self, min_zoom: Option<f64>, max_zoom: Option<f64>) -> Self {
        self.config.map_options.min_zoom = min_zoom;
        self.config.map_options.max_zoom = max_zoom;
        self
    }

    pub fn with_zoom_delta(mut self, delta: f64) -> Self {
        self.config.map_options.zoom_delta = delta;
        self
    }

    /// Enable or disable dragging
    pub fn with_dragging(mut self, enabled: bool) -> Self {
        self.config.map_options.dragging = enabled;
        self
    }

    /// Enable or disable scroll wheel zoom
    pub fn with_scroll_wheel_zoom(mut self, enabled: bool) -> Self {
        self.config.map_options.scroll_wheel_zoom = enabled;
        self
    }

    /// Enable or disable the attribution control
    pub fn with_attribution_control(mut self, enabled: bool) -> Self {
        self.config.map_options.attribution_control = enabled;
        self
    }

    /// Replace the tile layer
    pub fn with_tile_layer(mut self, options: TileLayerOptions) -> Self {
        self.config.tile_layer = options;
        self
    }

    /// Icon for the marker placed by `show`
    pub fn with_marker_icon(mut self, icon: IconOptions) -> Self {
        self.config.marker_icon = Some(icon);
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<MapViewConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the config and show the map
    pub fn show<L: MapLibrary>(self, library: L, request: &MapRequest) -> Result<MapView<L>> {
        let config = self.build()?;
        MapView::show(library, &config, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;

    #[test]
    fn test_builder_defaults_match_config() {
        assert_eq!(MapViewBuilder::new().build().unwrap(), MapViewConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = MapViewBuilder::new()
            .with_container("map-panel")
            .with_zoom(5.0)
            .with_zoom_limits(Some(3.0), Some(12.0))
            .with_dragging(false)
            .with_marker_icon(IconOptions::highlighted())
            .build()
            .unwrap();

        assert_eq!(config.container_id, "map-panel");
        assert_eq!(config.zoom, 5.0);
        assert_eq!(config.max_zoom(), 12.0);
        assert!(!config.map_options.dragging);
        assert_eq!(config.marker_icon, Some(IconOptions::highlighted()));
    }

    #[test]
    fn test_builder_rejects_bad_zoom() {
        let err = MapViewBuilder::new()
            .with_zoom_limits(None, Some(10.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }
}
