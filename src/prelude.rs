//! Prelude module for common mapview types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapview::prelude::*;`

pub use crate::core::{
    builder::MapViewBuilder,
    config::{MapOptions, MapViewConfig},
    constants::{DEFAULT_CONTAINER_ID, DEFAULT_ZOOM, FOCUS_ZOOM},
    geo::{LatLng, TileCoord},
    map::{show_map, MapView},
    request::MapRequest,
};

pub use crate::layers::{
    marker::{IconOptions, MarkerOptions},
    tile::TileLayerOptions,
};

pub use crate::tiles::source::{TileSource, UrlTemplateSource};

pub use crate::traits::MapLibrary;

pub use crate::{Error as MapError, Result};
