pub mod marker;
pub mod tile;

pub use marker::{IconOptions, MarkerOptions};
pub use tile::TileLayerOptions;
