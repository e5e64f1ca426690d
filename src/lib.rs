//! # mapview
//!
//! Renders an interactive slippy map into a host page: the map is centred on
//! a coordinate, gets one tile layer from a remote tile provider and a single
//! marker at that coordinate.
//!
//! The map widget itself is reached through the [`MapLibrary`] trait so it can
//! be swapped for a fake in tests. With the `wasm` feature enabled the
//! `wasm::leaflet::Leaflet` implementation drives Leaflet in the browser and
//! `showMap(apiKey, latitude, longitude)` is exported to JavaScript.

pub mod core;
pub mod layers;
pub mod prelude;
pub mod testing;
pub mod tiles;
pub mod traits;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::constants;

// Re-export public API
pub use core::{
    builder::MapViewBuilder,
    config::{MapOptions, MapViewConfig},
    geo::{LatLng, TileCoord},
    map::{show_map, MapView},
    request::MapRequest,
};

pub use layers::{
    marker::{IconOptions, MarkerOptions},
    tile::TileLayerOptions,
};

pub use tiles::source::{TileSource, UrlTemplateSource};
pub use traits::MapLibrary;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Missing API key for the tile provider")]
    MissingApiKey,

    #[error("Container element not found: #{0}")]
    ContainerNotFound(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Map library error: {0}")]
    Library(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
