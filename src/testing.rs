//! In-memory [`MapLibrary`] that records what it is asked to do.
//!
//! Models a page with a fixed set of element ids. Each created map keeps its
//! current view, tile layers and markers so tests can assert on the result
//! rather than on the call sequence alone.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::{
    core::{
        config::MapOptions,
        constants::{DEFAULT_CONTAINER_ID, FOCUS_ZOOM},
        geo::LatLng,
    },
    layers::{marker::MarkerOptions, tile::TileLayerOptions},
    traits::MapLibrary,
    MapError, Result,
};

/// One call made against the library
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryCall {
    CreateMap {
        container_id: String,
        center: LatLng,
        zoom: f64,
    },
    AddTileLayer {
        map: usize,
        url_template: String,
    },
    AddMarker {
        map: usize,
        position: LatLng,
        focus_on_double_click: bool,
    },
    SetView {
        map: usize,
        center: LatLng,
        zoom: f64,
    },
}

/// State of one created map
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMap {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: f64,
    pub options: MapOptions,
    pub tile_layers: Vec<TileLayerOptions>,
    pub markers: Vec<MarkerOptions>,
}

#[derive(Debug, Default)]
pub struct RecordingMapLibrary {
    containers: BTreeSet<String>,
    tile_layer_error: Option<String>,
    maps: RefCell<Vec<RecordedMap>>,
    calls: RefCell<Vec<LibraryCall>>,
}

impl RecordingMapLibrary {
    /// A page holding the default `#mapid` container
    pub fn new() -> Self {
        Self::empty_page().with_container(DEFAULT_CONTAINER_ID)
    }

    /// A page with no elements at all
    pub fn empty_page() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.insert(id.into());
        self
    }

    /// Make every `add_tile_layer` call fail with `message`
    pub fn failing_tile_layers(mut self, message: impl Into<String>) -> Self {
        self.tile_layer_error = Some(message.into());
        self
    }

    pub fn calls(&self) -> Vec<LibraryCall> {
        self.calls.borrow().clone()
    }

    pub fn maps(&self) -> Vec<RecordedMap> {
        self.maps.borrow().clone()
    }

    pub fn map(&self, handle: usize) -> Option<RecordedMap> {
        self.maps.borrow().get(handle).cloned()
    }

    /// Act out a double-click on the `index`-th marker of a map. Markers
    /// placed with `focus_on_double_click` re-centre the map at `FOCUS_ZOOM`;
    /// returns whether the view changed.
    pub fn double_click_marker(&self, handle: usize, index: usize) -> Result<bool> {
        let marker = self
            .with_map(handle, |recorded| recorded.markers.get(index).cloned())?
            .ok_or_else(|| MapError::Library(format!("map {handle} has no marker {index}")))?;
        if !marker.focus_on_double_click {
            return Ok(false);
        }
        self.set_view(&handle, marker.position, FOCUS_ZOOM)?;
        Ok(true)
    }

    fn with_map<T>(&self, handle: usize, f: impl FnOnce(&mut RecordedMap) -> T) -> Result<T> {
        let mut maps = self.maps.borrow_mut();
        let map = maps
            .get_mut(handle)
            .ok_or_else(|| MapError::Library(format!("unknown map handle {handle}")))?;
        Ok(f(map))
    }
}

impl MapLibrary for RecordingMapLibrary {
    type Map = usize;

    fn create_map(
        &self,
        container_id: &str,
        center: LatLng,
        zoom: f64,
        options: &MapOptions,
    ) -> Result<Self::Map> {
        if !self.containers.contains(container_id) {
            return Err(MapError::ContainerNotFound(container_id.to_string()));
        }
        if self
            .maps
            .borrow()
            .iter()
            .any(|map| map.container_id == container_id)
        {
            return Err(MapError::Library(
                "Map container is already initialized.".to_string(),
            ));
        }

        self.calls.borrow_mut().push(LibraryCall::CreateMap {
            container_id: container_id.to_string(),
            center,
            zoom,
        });

        let mut maps = self.maps.borrow_mut();
        maps.push(RecordedMap {
            container_id: container_id.to_string(),
            center,
            zoom,
            options: options.clone(),
            tile_layers: Vec::new(),
            markers: Vec::new(),
        });
        Ok(maps.len() - 1)
    }

    fn add_tile_layer(&self, map: &Self::Map, options: &TileLayerOptions) -> Result<()> {
        if let Some(message) = &self.tile_layer_error {
            return Err(MapError::Library(message.clone()));
        }

        self.with_map(*map, |recorded| recorded.tile_layers.push(options.clone()))?;
        self.calls.borrow_mut().push(LibraryCall::AddTileLayer {
            map: *map,
            url_template: options.url_template.clone(),
        });
        Ok(())
    }

    fn add_marker(&self, map: &Self::Map, marker: &MarkerOptions) -> Result<()> {
        self.with_map(*map, |recorded| recorded.markers.push(marker.clone()))?;
        self.calls.borrow_mut().push(LibraryCall::AddMarker {
            map: *map,
            position: marker.position,
            focus_on_double_click: marker.focus_on_double_click,
        });
        Ok(())
    }

    fn set_view(&self, map: &Self::Map, center: LatLng, zoom: f64) -> Result<()> {
        self.with_map(*map, |recorded| {
            recorded.center = center;
            recorded.zoom = zoom;
        })?;
        self.calls.borrow_mut().push(LibraryCall::SetView {
            map: *map,
            center,
            zoom,
        });
        Ok(())
    }
}
