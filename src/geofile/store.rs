use crate::geofile::feature::Feature;
use crate::geometry::hit_test::ring_contains;

/// Owns the committed feature collection. Features keep their insertion
/// order, which is also the order containment lookups scan in.
#[derive(Debug)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    pub fn all(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn add(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Remove the first feature equal to `feature`. Removing a feature that
    /// is not in the store does nothing.
    pub fn remove(&mut self, feature: &Feature) {
        if let Some(index) = self
            .features
            .iter()
            .position(|candidate| candidate == feature)
        {
            self.features.remove(index);
        }
    }

    /// First feature, in insertion order, whose polygon outer ring contains
    /// `coord`. Features with any other geometry are not selectable.
    pub fn find_containing(&self, coord: geo::Coord) -> Option<&Feature> {
        self.features.iter().find(|feature| match &feature.geometry {
            Some(geo::Geometry::Polygon(polygon)) => ring_contains(polygon.exterior(), coord),
            // TODO also hit-test the outer rings of MultiPolygon features
            // loaded from existing documents.
            _ => false,
        })
    }

    /// Replace the whole collection, e.g. with the contents of a loaded file.
    pub fn replace_all(&mut self, features: Vec<Feature>) {
        self.features = features;
    }
}
