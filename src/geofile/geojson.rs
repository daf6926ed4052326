use std::{fs, path::Path};

use crate::geofile::feature::Feature;

/// Read a GeoJSON FeatureCollection from `filepath`.
///
/// The editor must come up even when the target file does not exist yet or
/// holds junk, so every failure recovers to an empty collection and is
/// logged instead of returned.
pub fn read_feature_collection(filepath: &Path) -> Vec<Feature> {
    let contents = match fs::read_to_string(filepath) {
        Ok(contents) => contents,
        Err(error) => {
            log::warn!(
                "Could not read {:?}, starting with an empty collection: {}",
                filepath,
                error
            );
            return Vec::new();
        }
    };
    let geojson_contents: geojson::GeoJson = match contents.parse() {
        Ok(geojson_contents) => geojson_contents,
        Err(error) => {
            log::warn!(
                "Could not parse {:?}, starting with an empty collection: {}",
                filepath,
                error
            );
            return Vec::new();
        }
    };
    let feature_collection = match geojson_contents {
        geojson::GeoJson::FeatureCollection(feature_collection) => feature_collection,
        _ => {
            log::warn!(
                "{:?} is not a FeatureCollection, starting with an empty collection",
                filepath
            );
            return Vec::new();
        }
    };
    feature_collection
        .features
        .into_iter()
        .map(feature_from_geojson)
        .collect()
}

/// Write the features to `output_filepath` as a GeoJSON FeatureCollection.
pub fn write_feature_collection(
    features: &[Feature],
    output_filepath: &Path,
) -> anyhow::Result<()> {
    let feature_collection: geojson::FeatureCollection =
        features.iter().map(feature_to_geojson).collect();
    let geojson_contents = geojson::GeoJson::from(feature_collection);
    fs::write(output_filepath, geojson_contents.to_string())?;
    Ok(())
}

fn feature_from_geojson(feature: geojson::Feature) -> Feature {
    let geometry = feature
        .geometry
        .and_then(|geometry| match geo::Geometry::try_from(geometry) {
            Ok(geometry) => Some(geometry),
            Err(error) => {
                log::warn!("Dropping unsupported geometry: {}", error);
                None
            }
        });
    Feature {
        geometry,
        properties: feature.properties.unwrap_or_default(),
    }
}

fn feature_to_geojson(feature: &Feature) -> geojson::Feature {
    geojson::Feature {
        bbox: None,
        geometry: feature
            .geometry
            .as_ref()
            .map(|geometry| geojson::Geometry::new(geojson::Value::from(geometry))),
        id: None,
        properties: Some(feature.properties.clone()),
        foreign_members: None,
    }
}
