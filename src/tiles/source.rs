use std::collections::BTreeMap;

use crate::{core::geo::TileCoord, MapError, Result};

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> Result<String>;
}

/// Expands Leaflet-style URL templates such as
/// `https://{s}.example.com/{z}/{x}/{y}.png?key={accessToken}`.
///
/// `{z}` is the grid zoom of `coord` plus the zoom offset, `{s}` rotates
/// through the subdomains by `(x + y) % len`, `{r}` is always empty (no retina
/// detection). Any other `{name}` is looked up in the option values and a
/// missing one is an error.
#[derive(Debug, Clone)]
pub struct UrlTemplateSource {
    template: String,
    subdomains: Vec<String>,
    zoom_offset: i8,
    values: BTreeMap<String, String>,
}

impl UrlTemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            subdomains: Vec::new(),
            zoom_offset: 0,
            values: BTreeMap::new(),
        }
    }

    pub fn with_subdomains(mut self, subdomains: Vec<String>) -> Self {
        self.subdomains = subdomains;
        self
    }

    pub fn with_zoom_offset(mut self, zoom_offset: i8) -> Self {
        self.zoom_offset = zoom_offset;
        self
    }

    /// Provide a value for a `{name}` placeholder
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    fn lookup(&self, key: &str, coord: TileCoord) -> Result<String> {
        if let Some(value) = self.values.get(key) {
            return Ok(value.clone());
        }

        match key {
            "x" => Ok(coord.x.to_string()),
            "y" => Ok(coord.y.to_string()),
            "z" => {
                let zoom = coord.z as i16 + self.zoom_offset as i16;
                if zoom < 0 {
                    return Err(MapError::Template(format!(
                        "zoom {} with offset {} is negative",
                        coord.z, self.zoom_offset
                    )));
                }
                Ok(zoom.to_string())
            }
            "r" => Ok(String::new()),
            "s" if !self.subdomains.is_empty() => {
                let index = (coord.x as u64 + coord.y as u64) % self.subdomains.len() as u64;
                Ok(self.subdomains[index as usize].clone())
            }
            _ => Err(MapError::Template(format!(
                "no value provided for variable {{{key}}}"
            ))),
        }
    }
}

impl TileSource for UrlTemplateSource {
    fn url(&self, coord: TileCoord) -> Result<String> {
        let mut url = String::with_capacity(self.template.len() + 32);
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            url.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                MapError::Template(format!("unclosed placeholder in {}", self.template))
            })?;
            url.push_str(&self.lookup(after[..close].trim(), coord)?);
            rest = &after[close + 1..];
        }
        url.push_str(rest);

        Ok(url)
    }
}
