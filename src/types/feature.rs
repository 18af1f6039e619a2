use geo::Point;
use serde::Serialize;
use serde_json::Value;

use super::Archetype;

/// Ordinal of a feature in its collection, matching the index the rendering
/// surface assigns when the collection is added as a source.
pub type FeatureId = u32;

/// Flattened attribute bag of a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityAttributes {
    pub name: String,
    pub state: String,
    pub archetype: Archetype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_home_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate_val: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate_flag: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growing_val: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growing_flag: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_ind: Option<Value>,
}

impl Default for CityAttributes {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            state: "Unknown".to_string(),
            archetype: Archetype::Unknown,
            type_name: None,
            county: None,
            population: None,
            median_income: None,
            median_home_value: None,
            median_age: None,
            vacancy_rate: None,
            climate_val: None,
            climate_flag: None,
            growing_val: None,
            growing_flag: None,
            type_ind: None,
        }
    }
}

/// A single city point.
#[derive(Debug, Clone, PartialEq)]
pub struct CityFeature {
    pub id: FeatureId,
    pub coordinates: Point<f64>, // (lon, lat)
    pub attributes: CityAttributes,
}

impl CityFeature {
    #[inline] pub fn name(&self) -> &str { &self.attributes.name }

    #[inline] pub fn state(&self) -> &str { &self.attributes.state }

    #[inline] pub fn archetype(&self) -> Archetype { self.attributes.archetype }

    #[inline] pub fn lng_lat(&self) -> [f64; 2] { [self.coordinates.x(), self.coordinates.y()] }

    /// "Name, State" as shown in tooltips and search results.
    pub fn label(&self) -> String {
        format!("{}, {}", self.attributes.name, self.attributes.state)
    }
}
