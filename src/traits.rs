//! The capability the map view drives.
//!
//! Rendering, tile fetching and user interaction belong to an external widget
//! library. This crate only ever talks to it through [`MapLibrary`], so the
//! browser binding and the in-memory fake are interchangeable.

use crate::{
    core::{config::MapOptions, geo::LatLng},
    layers::{marker::MarkerOptions, tile::TileLayerOptions},
    Result,
};

/// Trait for map widget libraries (Leaflet and look-alikes)
pub trait MapLibrary {
    /// Handle to a created map instance
    type Map;

    /// Create a map inside the element with id `container_id`, centred on
    /// `center` at `zoom`.
    ///
    /// Must fail with [`crate::MapError::ContainerNotFound`] when the element
    /// does not exist.
    fn create_map(
        &self,
        container_id: &str,
        center: LatLng,
        zoom: f64,
        options: &MapOptions,
    ) -> Result<Self::Map>;

    /// Attach a tile layer. `options.url_template` is the tile URL.
    fn add_tile_layer(&self, map: &Self::Map, options: &TileLayerOptions) -> Result<()>;

    /// Place a marker
    fn add_marker(&self, map: &Self::Map, marker: &MarkerOptions) -> Result<()>;

    /// Move the map to `center` at `zoom`
    fn set_view(&self, map: &Self::Map, center: LatLng, zoom: f64) -> Result<()>;
}

impl<L: MapLibrary + ?Sized> MapLibrary for &L {
    type Map = L::Map;

    fn create_map(
        &self,
        container_id: &str,
        center: LatLng,
        zoom: f64,
        options: &MapOptions,
    ) -> Result<Self::Map> {
        (**self).create_map(container_id, center, zoom, options)
    }

    fn add_tile_layer(&self, map: &Self::Map, options: &TileLayerOptions) -> Result<()> {
        (**self).add_tile_layer(map, options)
    }

    fn add_marker(&self, map: &Self::Map, marker: &MarkerOptions) -> Result<()> {
        (**self).add_marker(map, marker)
    }

    fn set_view(&self, map: &Self::Map, center: LatLng, zoom: f64) -> Result<()> {
        (**self).set_view(map, center, zoom)
    }
}
