use mapview::prelude::*;
use mapview::testing::{LibraryCall, RecordedMap, RecordingMapLibrary};

/// Integration tests for showing a map through an injected library.
/// The recording library stands in for Leaflet and models the host page.
#[cfg(test)]
mod integration_tests {
    use super::*;

    fn init_logger() {
        #[cfg(feature = "debug")]
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn shown_map(library: &RecordingMapLibrary) -> RecordedMap {
        let maps = library.maps();
        assert_eq!(maps.len(), 1, "expected exactly one map");
        maps[0].clone()
    }

    /// London example: centre, zoom 16, one marker, key in the tile URL
    #[test]
    fn test_show_map_london() {
        init_logger();
        let library = RecordingMapLibrary::new();
        show_map(&library, "KEY123", 51.5074, -0.1278).unwrap();

        let map = shown_map(&library);
        let london = LatLng::new(51.5074, -0.1278);
        assert_eq!(map.container_id, "mapid");
        assert_eq!(map.center, london);
        assert_eq!(map.zoom, 16.0);
        assert_eq!(map.markers.len(), 1);
        assert_eq!(map.markers[0].position, london);

        assert_eq!(map.tile_layers.len(), 1);
        let tile_layer = &map.tile_layers[0];
        assert_eq!(tile_layer.access_token.as_deref(), Some("KEY123"));
        assert_eq!(tile_layer.max_zoom, 19);
        assert_eq!(tile_layer.tile_size, 512);
        assert_eq!(tile_layer.zoom_offset, -1);

        let url = tile_layer.tile_url(&london, 16).unwrap();
        assert!(url.contains("apikey=KEY123"), "{url}");
    }

    /// Calls happen in the order map, tile layer, marker
    #[test]
    fn test_call_order() {
        let library = RecordingMapLibrary::new();
        show_map(&library, "KEY123", 39.61, -3.69).unwrap();

        let calls = library.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], LibraryCall::CreateMap { .. }));
        assert!(matches!(
            calls[1],
            LibraryCall::AddTileLayer { ref url_template, .. }
                if url_template.ends_with("?apikey={accessToken}")
        ));
        assert_eq!(
            calls[2],
            LibraryCall::AddMarker {
                map: 0,
                position: LatLng::new(39.61, -3.69),
                focus_on_double_click: false,
            }
        );
    }

    /// Centre and marker follow the input over the whole valid range
    #[test]
    fn test_valid_coordinate_grid() {
        for lat in [-90.0, -45.5, 0.0, 33.3, 90.0] {
            for lng in [-180.0, -120.25, 0.0, 60.0, 180.0] {
                let library = RecordingMapLibrary::new();
                let view = show_map(&library, "KEY", lat, lng).unwrap();
                let map = shown_map(&library);

                assert_eq!(map.center, LatLng::new(lat, lng));
                assert_eq!(map.zoom, 16.0);
                assert_eq!(map.markers.len(), 1);
                assert_eq!(map.markers[0].position, LatLng::new(lat, lng));
                assert_eq!(view.marker_count(), 1);
            }
        }
    }

    /// Out-of-range input is rejected before any widget construction
    #[test]
    fn test_invalid_coordinates_rejected_early() {
        for (lat, lng) in [
            (91.0, 0.0),
            (-90.0001, 0.0),
            (0.0, 180.5),
            (0.0, -181.0),
            (f64::NAN, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            let library = RecordingMapLibrary::new();
            let err = show_map(&library, "KEY123", lat, lng).unwrap_err();

            assert!(matches!(err, MapError::InvalidCoordinates(_)), "{lat}, {lng}: {err}");
            assert!(library.calls().is_empty());
        }
    }

    /// A page without the container fails with ContainerNotFound only
    #[test]
    fn test_missing_container() {
        let library = RecordingMapLibrary::empty_page().with_container("elsewhere");
        let err = show_map(&library, "KEY123", 51.5074, -0.1278).unwrap_err();

        assert!(matches!(err, MapError::ContainerNotFound(ref id) if id == "mapid"));
        assert_eq!(err.to_string(), "Container element not found: #mapid");
        assert!(library.calls().is_empty());
    }

    /// A failing step stops the sequence
    #[test]
    fn test_tile_layer_failure_skips_marker() {
        let library = RecordingMapLibrary::new().failing_tile_layers("tile layer refused");
        let err = show_map(&library, "KEY123", 1.0, 2.0).unwrap_err();

        assert!(matches!(err, MapError::Library(ref m) if m == "tile layer refused"));
        assert!(shown_map(&library).markers.is_empty());
    }

    /// Custom container, zoom, icon and tile provider through the builder
    #[test]
    fn test_builder_show() {
        let library = RecordingMapLibrary::empty_page().with_container("property-map");
        let request = MapRequest::new("OSM-KEY", 39.61, -3.69);

        let view = MapViewBuilder::from_config(MapViewConfig::openstreetmap())
            .with_container("property-map")
            .with_zoom(5.0)
            .with_zoom_delta(1.0)
            .with_marker_icon(IconOptions::normal())
            .show(&library, &request)
            .unwrap();

        assert_eq!(view.zoom(), 5.0);
        let map = shown_map(&library);
        assert_eq!(map.container_id, "property-map");
        assert_eq!(map.zoom, 5.0);
        assert_eq!(map.markers[0].icon, Some(IconOptions::normal()));
        assert!(map.tile_layers[0].url_template.contains("openstreetmap.org"));
    }

    /// More markers and a focus after the initial show
    #[test]
    fn test_markers_and_focus_after_show() {
        let library = RecordingMapLibrary::new();
        let mut view = show_map(&library, "KEY123", 39.61, -3.69).unwrap();

        let sevilla = LatLng::new(37.3891, -5.9845);
        view.add_marker(
            &MarkerOptions::new(sevilla)
                .with_title("SUB-2024-17")
                .with_alt("SUB-2024-17")
                .with_icon(IconOptions::highlighted()),
        )
        .unwrap();
        view.focus(sevilla).unwrap();

        let map = shown_map(&library);
        assert_eq!(map.markers.len(), 2);
        assert_eq!(map.markers[1].title.as_deref(), Some("SUB-2024-17"));
        assert_eq!(map.center, sevilla);
        assert_eq!(map.zoom, FOCUS_ZOOM);
        assert_eq!(view.marker_count(), 2);

        // An invalid extra marker leaves the map untouched
        assert!(view
            .add_marker(&MarkerOptions::new(LatLng::new(100.0, 0.0)))
            .is_err());
        assert_eq!(shown_map(&library).markers.len(), 2);
    }

    /// Only markers asking for it zoom in when double-clicked
    #[test]
    fn test_double_click_focus_marker() {
        let library = RecordingMapLibrary::new();
        let mut view = show_map(&library, "KEY123", 39.61, -3.69).unwrap();

        let sevilla = LatLng::new(37.3891, -5.9845);
        view.add_marker(&MarkerOptions::new(sevilla).with_focus_on_double_click(true))
            .unwrap();

        // The initial marker keeps the view where it is
        assert!(!library.double_click_marker(0, 0).unwrap());
        assert_eq!(shown_map(&library).zoom, 16.0);

        assert!(library.double_click_marker(0, 1).unwrap());
        let map = shown_map(&library);
        assert_eq!(map.center, sevilla);
        assert_eq!(map.zoom, FOCUS_ZOOM);
    }

    /// Showing twice into the same container is refused by the library
    #[test]
    fn test_second_show_in_same_container_fails() {
        let library = RecordingMapLibrary::new();
        show_map(&library, "KEY123", 39.61, -3.69).unwrap();
        let err = show_map(&library, "KEY123", 51.5074, -0.1278).unwrap_err();

        assert!(matches!(err, MapError::Library(ref m) if m == "Map container is already initialized."));
        let map = shown_map(&library);
        assert_eq!(map.center, LatLng::new(39.61, -3.69));
        assert_eq!(map.markers.len(), 1);
    }

    /// A config coming from the host page as JSON
    #[test]
    fn test_json_config_show() {
        let library = RecordingMapLibrary::empty_page().with_container("map");
        let config = MapViewConfig::from_json(
            r#"{"containerId":"map","zoom":10,"mapOptions":{"scrollWheelZoom":false}}"#,
        )
        .unwrap();

        MapView::show(&library, &config, &MapRequest::new("K", 0.0, 0.0)).unwrap();

        let map = shown_map(&library);
        assert_eq!(map.zoom, 10.0);
        assert!(!map.options.scroll_wheel_zoom);
        assert_eq!(map.tile_layers[0].access_token.as_deref(), Some("K"));
    }
}
