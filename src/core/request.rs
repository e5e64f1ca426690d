//! The single value handed to the map initializer.

use serde::{Deserialize, Serialize};

use crate::{core::geo::LatLng, MapError, Result};

/// Credentials and target coordinate for one map.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MapRequest {
    pub fn new(api_key: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            api_key: api_key.into(),
            latitude,
            longitude,
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Checks the coordinate first, then the key. Nothing here touches the
    /// widget library, so a rejected request has no visible effect.
    pub fn validate(&self) -> Result<()> {
        self.center().validate()?;
        if self.api_key.trim().is_empty() {
            return Err(MapError::MissingApiKey);
        }
        Ok(())
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for MapRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapRequest")
            .field("api_key", &"<redacted>")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .finish()
    }
}
