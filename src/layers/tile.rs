use serde::{Deserialize, Serialize};

use crate::{
    core::{
        constants::{
            MAX_ZOOM, OPENSTREETMAP_ATTRIBUTION, OPENSTREETMAP_URL, THUNDERFOREST_ATLAS_URL,
            THUNDERFOREST_ATTRIBUTION, TILE_LAYER_ID, TILE_SIZE, ZOOM_OFFSET,
        },
        geo::{LatLng, TileCoord},
    },
    tiles::source::{TileSource, UrlTemplateSource},
    MapError, Result,
};

/// Configuration for a tile layer.
///
/// Field names serialize to Leaflet's `L.tileLayer` option names so the value
/// can be handed to the widget library as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Attribution HTML shown in the map corner
    pub attribution: String,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
    /// Provider style id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Added to the map zoom when building tile URLs
    pub zoom_offset: i8,
    /// Substituted for `{accessToken}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Available subdomains for `{s}`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subdomains: Vec<String>,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self::thunderforest()
    }
}

impl TileLayerOptions {
    /// Thunderforest atlas tiles: 512px, requested one zoom level up, key in the query
    pub fn thunderforest() -> Self {
        Self {
            url_template: THUNDERFOREST_ATLAS_URL.to_string(),
            attribution: THUNDERFOREST_ATTRIBUTION.to_string(),
            max_zoom: MAX_ZOOM,
            min_zoom: 0,
            id: Some(TILE_LAYER_ID.to_string()),
            tile_size: TILE_SIZE,
            zoom_offset: ZOOM_OFFSET,
            access_token: None,
            subdomains: Vec::new(),
        }
    }

    /// Create a tile layer for OpenStreetMap
    pub fn openstreetmap() -> Self {
        Self {
            url_template: OPENSTREETMAP_URL.to_string(),
            attribution: OPENSTREETMAP_ATTRIBUTION.to_string(),
            max_zoom: MAX_ZOOM,
            min_zoom: 0,
            id: None,
            tile_size: 256,
            zoom_offset: 0,
            access_token: None,
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.url_template.trim().is_empty() {
            return Err(MapError::Config("tile layer has no URL template".into()));
        }
        if self.min_zoom > self.max_zoom {
            return Err(MapError::Config(format!(
                "tile layer min zoom {} exceeds max zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.tile_size == 0 {
            return Err(MapError::Config("tile size must be positive".into()));
        }
        Ok(())
    }

    /// URL builder carrying these options' placeholders
    pub fn source(&self) -> UrlTemplateSource {
        let mut source = UrlTemplateSource::new(&self.url_template)
            .with_subdomains(self.subdomains.clone())
            .with_zoom_offset(self.zoom_offset);
        if let Some(token) = &self.access_token {
            source = source.with_value("accessToken", token);
        }
        if let Some(id) = &self.id {
            source = source.with_value("id", id);
        }
        source
    }

    /// Grid coordinate of the tile covering `lat_lng` at a map zoom level.
    /// The zoom offset is folded into the x/y grid, `z` stays the map zoom.
    /// An inverted zoom range resolves to `max_zoom`; `tile_url` rejects it.
    pub fn tile_for(&self, lat_lng: &LatLng, map_zoom: u8) -> TileCoord {
        let map_zoom = map_zoom.max(self.min_zoom).min(self.max_zoom);
        let grid_zoom = (map_zoom as i16 + self.zoom_offset as i16).max(0) as u8;
        let tile = TileCoord::from_lat_lng(lat_lng, grid_zoom);
        TileCoord::new(tile.x, tile.y, map_zoom)
    }

    /// URL of the tile covering `lat_lng` at a map zoom level
    pub fn tile_url(&self, lat_lng: &LatLng, map_zoom: u8) -> Result<String> {
        self.validate()?;
        self.source().url(self.tile_for(lat_lng, map_zoom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thunderforest_defaults() {
        let options = TileLayerOptions::default();
        assert_eq!(
            options.url_template,
            "https://tile.thunderforest.com/atlas/{z}/{x}/{y}.png?apikey={accessToken}"
        );
        assert_eq!(options.max_zoom, 19);
        assert_eq!(options.tile_size, 512);
        assert_eq!(options.zoom_offset, -1);
        assert_eq!(options.id.as_deref(), Some("mapbox/streets-v11"));
        assert_eq!(
            options.attribution,
            "Map data &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, Imagery © <a href=\"https://www.thunderforest.com/\">Thunderforest</a>"
        );
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_serializes_leaflet_option_names() {
        let options = TileLayerOptions::thunderforest().with_access_token("KEY123");
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["maxZoom"], 19);
        assert_eq!(json["tileSize"], 512);
        assert_eq!(json["zoomOffset"], -1);
        assert_eq!(json["accessToken"], "KEY123");
        assert_eq!(json["id"], "mapbox/streets-v11");
        assert!(json.get("subdomains").is_none());
    }

    #[test]
    fn test_tile_url_carries_key() {
        let options = TileLayerOptions::thunderforest().with_access_token("KEY123");
        let url = options.tile_url(&LatLng::new(51.5074, -0.1278), 16).unwrap();

        assert!(url.starts_with("https://tile.thunderforest.com/atlas/15/"));
        assert!(url.ends_with(".png?apikey=KEY123"));
    }

    #[test]
    fn test_tile_url_without_key_fails() {
        let err = TileLayerOptions::thunderforest()
            .tile_url(&LatLng::new(0.0, 0.0), 16)
            .unwrap_err();
        assert!(matches!(err, MapError::Template(_)));
    }

    #[test]
    fn test_tile_for_clamps_to_max_zoom() {
        let options = TileLayerOptions::thunderforest();
        assert_eq!(options.tile_for(&LatLng::new(0.0, 0.0), 25).z, 19);
    }

    #[test]
    fn test_openstreetmap_preset() {
        let options = TileLayerOptions::openstreetmap();
        let url = options.tile_url(&LatLng::new(0.0, 0.0), 1).unwrap();
        assert_eq!(url, "https://c.tile.openstreetmap.org/1/1/1.png");
    }

    #[test]
    fn test_inconsistent_zoom_rejected() {
        let options = TileLayerOptions {
            min_zoom: 10,
            max_zoom: 5,
            ..TileLayerOptions::default()
        };
        assert!(matches!(options.validate(), Err(MapError::Config(_))));
    }

    #[test]
    fn test_inverted_zoom_range_fails_without_panicking() {
        let options: TileLayerOptions =
            serde_json::from_str(r#"{"minZoom":10,"maxZoom":5}"#).unwrap();
        let options = options.with_access_token("K");

        let err = options.tile_url(&LatLng::new(0.0, 0.0), 7).unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
        assert_eq!(options.tile_for(&LatLng::new(0.0, 0.0), 7).z, 5);
    }
}
