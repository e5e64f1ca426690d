use crate::{
    core::{config::MapViewConfig, constants::FOCUS_ZOOM, geo::LatLng, request::MapRequest},
    layers::marker::MarkerOptions,
    traits::MapLibrary,
    MapError, Result,
};

/// A map that has been shown in its container.
///
/// Owns the library (or a reference to it, see the blanket impl of
/// [`MapLibrary`] for `&L`) together with the handle of the created map.
pub struct MapView<L: MapLibrary> {
    library: L,
    map: L::Map,
    config: MapViewConfig,
    center: LatLng,
    zoom: f64,
    marker_count: usize,
}

/// Show the default map (Thunderforest atlas, zoom 16, `#mapid`) centred on
/// `(latitude, longitude)` with one marker there.
pub fn show_map<L: MapLibrary>(
    library: L,
    api_key: &str,
    latitude: f64,
    longitude: f64,
) -> Result<MapView<L>> {
    MapView::show(
        library,
        &MapViewConfig::default(),
        &MapRequest::new(api_key, latitude, longitude),
    )
}

impl<L: MapLibrary> MapView<L> {
    /// Validate the request and config, then create the map, attach the tile
    /// layer and place the marker, in that order. Nothing reaches the library
    /// unless validation passes, and a failed step stops the sequence.
    pub fn show(library: L, config: &MapViewConfig, request: &MapRequest) -> Result<Self> {
        if let Err(e) = request.validate().and_then(|_| config.validate()) {
            log::warn!("Rejected map request {:?}: {}", request, e);
            return Err(e);
        }

        let center = request.center();
        let zoom = config.zoom;

        log::debug!("Creating map in #{} at {} zoom {}", config.container_id, center, zoom);
        let map = library.create_map(&config.container_id, center, zoom, &config.map_options)?;

        let tile_layer = config
            .tile_layer
            .clone()
            .with_access_token(request.api_key.clone());
        log::debug!("Adding tile layer {}", tile_layer.url_template);
        library.add_tile_layer(&map, &tile_layer)?;

        let mut view = Self {
            library,
            map,
            config: config.clone(),
            center,
            zoom,
            marker_count: 0,
        };

        let mut marker = MarkerOptions::new(center);
        if let Some(icon) = &config.marker_icon {
            marker = marker.with_icon(icon.clone());
        }
        view.add_marker(&marker)?;

        log::info!("Map shown in #{} at {}", view.config.container_id, center);
        Ok(view)
    }

    /// Place a further marker
    pub fn add_marker(&mut self, marker: &MarkerOptions) -> Result<()> {
        marker.validate()?;
        log::debug!("Adding marker at {}", marker.position);
        self.library.add_marker(&self.map, marker)?;
        self.marker_count += 1;
        Ok(())
    }

    /// Re-centre the map. The zoom is clamped to the configured range.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        center.validate()?;
        if !zoom.is_finite() {
            return Err(MapError::Config(format!("zoom {zoom} is not a finite number")));
        }
        let zoom = self.config.clamp_zoom(zoom);
        self.library.set_view(&self.map, center, zoom)?;
        self.center = center;
        self.zoom = zoom;
        Ok(())
    }

    /// Zoom in on a single point of interest
    pub fn focus(&mut self, center: LatLng) -> Result<()> {
        self.set_view(center, FOCUS_ZOOM)
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    pub fn config(&self) -> &MapViewConfig {
        &self.config
    }

    pub fn handle(&self) -> &L::Map {
        &self.map
    }

    pub fn library(&self) -> &L {
        &self.library
    }
}

impl<L: MapLibrary> std::fmt::Debug for MapView<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapView")
            .field("container_id", &self.config.container_id)
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .field("marker_count", &self.marker_count)
            .finish()
    }
}
