use geojson::JsonObject;

/// A map feature: a geometry plus its GeoJSON properties.
///
/// The geometry is optional because GeoJSON allows features without one;
/// such features round-trip through load and save untouched. Equality is by
/// value, which is what feature removal works on.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Option<geo::Geometry>,
    pub properties: JsonObject,
}

impl Feature {
    /// The feature's "title" property, or "" when absent or not a string.
    pub fn title(&self) -> &str {
        self.properties
            .get("title")
            .and_then(|value| value.as_str())
            .unwrap_or("")
    }
}

impl From<geo::Geometry> for Feature {
    fn from(value: geo::Geometry) -> Self {
        Self {
            geometry: Some(value),
            properties: JsonObject::new(),
        }
    }
}
