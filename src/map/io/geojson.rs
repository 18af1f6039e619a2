use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::map::CityCollection;
use crate::types::CityFeature;

impl CityCollection {
    /// Export the cities as a GeoJSON FeatureCollection of points.
    /// Each feature carries its ordinal id and the flattened attribute bag.
    pub fn to_geojson(&self) -> Result<Value> {
        let features = self.iter()
            .map(feature_to_geojson)
            .collect::<Result<Vec<_>>>()?;

        Ok(json!({
            "type": "FeatureCollection",
            "features": features,
        }))
    }

    /// Serialize the GeoJSON export to a string.
    pub fn to_geojson_string(&self) -> Result<String> {
        serde_json::to_string(&self.to_geojson()?)
            .context("[map::io::geojson] Failed to serialize GeoJSON to string")
    }
}

fn feature_to_geojson(feature: &CityFeature) -> Result<Value> {
    let properties = serde_json::to_value(&feature.attributes)
        .with_context(|| format!("[map::io::geojson] Failed to serialize properties of feature {}", feature.id))?;

    Ok(json!({
        "type": "Feature",
        "id": feature.id, // Must match the surface's insertion-order index
        "geometry": {
            "type": "Point",
            "coordinates": feature.lng_lat(),
        },
        "properties": properties,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use crate::map::transform;

    #[test]
    fn exports_point_features_with_ordinal_ids() {
        let rows: Vec<_> = [
            json!({"clean_name": "Austin", "state": "TX", "type": "Destination", "longitude": -97.74, "latitude": 30.27, "population": 961855}),
            json!({"clean_name": "Nowhere", "longitude": "", "latitude": ""}),
            json!({"clean_name": "Miami", "state": "FL", "type": "risk", "longitude": -80.19, "latitude": 25.76}),
        ].into_iter().map(|v| match v { Value::Object(map) => map, _ => unreachable!() }).collect();

        let geojson = transform(&rows).to_geojson().unwrap();

        assert_eq!(geojson["type"], json!("FeatureCollection"));
        let features = geojson["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[1], json!({
            "type": "Feature",
            "id": 1,
            "geometry": {"type": "Point", "coordinates": [-80.19, 25.76]},
            "properties": {"name": "Miami", "state": "FL", "archetype": "risk"},
        }));
        assert_eq!(features[0]["properties"]["archetype"], json!("destination"));
        assert_eq!(features[0]["properties"]["population"], json!(961855.0));
    }
}
