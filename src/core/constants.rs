//! Map defaults and the tile provider's wire constants.
//! The URL template and attribution are sent to the widget library verbatim.

/// Id of the element the map is rendered into.
pub const DEFAULT_CONTAINER_ID: &str = "mapid";

/// Initial zoom of a freshly shown map.
pub const DEFAULT_ZOOM: f64 = 16.0;

/// Zoom used when re-centring on a single point of interest.
pub const FOCUS_ZOOM: f64 = 15.0;

/// Programmatic +/- zoom step.
pub const DEFAULT_ZOOM_DELTA: f64 = 1.0;

/// Thunderforest "atlas" raster tiles.
pub const THUNDERFOREST_ATLAS_URL: &str =
    "https://tile.thunderforest.com/atlas/{z}/{x}/{y}.png?apikey={accessToken}";

pub const THUNDERFOREST_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, Imagery © <a href=\"https://www.thunderforest.com/\">Thunderforest</a>";

/// Style id forwarded with the tile layer options.
pub const TILE_LAYER_ID: &str = "mapbox/streets-v11";

/// Highest zoom the tile provider serves.
pub const MAX_ZOOM: u8 = 19;

/// Provider tiles are 512px, so Leaflet requests them one zoom level lower.
pub const TILE_SIZE: u32 = 512;
pub const ZOOM_OFFSET: i8 = -1;

pub const OPENSTREETMAP_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OPENSTREETMAP_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (u32, u32) = (12, 41);

pub const MARKER_POPUP_ANCHOR: (i32, i32) = (1, -34);
pub const MARKER_TOOLTIP_ANCHOR: (i32, i32) = (16, -28);
pub const MARKER_SHADOW_SIZE: (u32, u32) = (41, 41);
pub const MARKER_SHADOW_URL: &str = "css/images/marker-shadow.png";
