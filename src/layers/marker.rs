use serde::{Deserialize, Serialize};

use crate::{
    core::{
        constants::{
            MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_POPUP_ANCHOR, MARKER_SHADOW_SIZE,
            MARKER_SHADOW_URL, MARKER_TOOLTIP_ANCHOR,
        },
        geo::LatLng,
    },
    Result,
};

/// Leaflet `L.icon` options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconOptions {
    pub icon_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_retina_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_url: Option<String>,
    pub icon_size: (u32, u32),
    pub icon_anchor: (u32, u32),
    pub popup_anchor: (i32, i32),
    pub tooltip_anchor: (i32, i32),
    pub shadow_size: (u32, u32),
}

impl IconOptions {
    /// Standard pin geometry with the images found under `images/marker-icon-{color}.png`
    pub fn colored(color: &str) -> Self {
        Self {
            icon_url: format!("images/marker-icon-{color}.png"),
            icon_retina_url: Some(format!("images/marker-icon-2x-{color}.png")),
            shadow_url: Some(MARKER_SHADOW_URL.to_string()),
            icon_size: MARKER_ICON_SIZE,
            icon_anchor: MARKER_ICON_ANCHOR,
            popup_anchor: MARKER_POPUP_ANCHOR,
            tooltip_anchor: MARKER_TOOLTIP_ANCHOR,
            shadow_size: MARKER_SHADOW_SIZE,
        }
    }

    pub fn normal() -> Self {
        Self::colored("black")
    }

    /// Used to make one marker stand out from the rest
    pub fn highlighted() -> Self {
        Self::colored("red")
    }
}

/// A point annotation on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    pub position: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconOptions>,
    /// Double-clicking the marker re-centres the map on it at `FOCUS_ZOOM`
    #[serde(default)]
    pub focus_on_double_click: bool,
}

impl MarkerOptions {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            title: None,
            alt: None,
            icon: None,
            focus_on_double_click: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_icon(mut self, icon: IconOptions) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_focus_on_double_click(mut self, enabled: bool) -> Self {
        self.focus_on_double_click = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.position.validate()
    }
}
