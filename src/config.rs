//! Map configuration: data location, camera, paint constants and search limits.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::view::{Rgb, ZoomStops};

/// Top-level configuration. Every field has a default, so a partial JSON
/// document (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Location of the city CSV, relative to the page. Read by the host page,
    /// which fetches it and passes the text to `load_csv`.
    pub data_url: String,
    /// Base map style. Host page setting.
    pub style_url: String,
    /// Initial camera center (lon, lat). Host page setting.
    pub center: [f64; 2],
    /// Initial zoom. Host page setting.
    pub zoom: f64,
    /// Geometry source and point layer names the host page creates on the map.
    /// The library never reads them; the surface already targets that layer.
    pub source_id: String,
    pub layer_id: String,
    pub radius: RadiusConfig,
    pub stroke: StrokeConfig,
    pub fly_to: FlyToConfig,
    pub search: SearchConfig,
    /// Report linked under the recommendation list; omitted when `None`.
    pub report_url: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            data_url: "./data/city_and_archetype.csv".to_string(),
            style_url: "mapbox://styles/mapbox/light-v11".to_string(),
            center: [-98.5795, 39.8283], // center of the contiguous US
            zoom: 3.5,
            source_id: "us-cities".to_string(),
            layer_id: "cities-points".to_string(),
            radius: RadiusConfig::default(),
            stroke: StrokeConfig::default(),
            fly_to: FlyToConfig::default(),
            search: SearchConfig::default(),
            report_url: Some("https://drive.google.com/file/d/1B68MkBP_PyyLm_oDq9HBN__tvExSU_WO/view?usp=sharing".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusConfig {
    /// Radius of unselected points by zoom level.
    pub zoom: ZoomStops,
    /// Fixed radius of the selected point, at every zoom.
    pub selected: f64,
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomStops::default(),
            selected: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    pub width: f64,
    pub selected_width: f64,
    pub color: Rgb,
    pub opacity: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self { width: 1.0, selected_width: 3.0, color: Rgb::from_hex(0xffffff), opacity: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyToConfig {
    pub zoom: f64,
    pub speed: f64,
}

impl Default for FlyToConfig {
    fn default() -> Self { Self { zoom: 8.0, speed: 0.8 } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Shorter queries hide the result panel.
    pub min_query_len: usize,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self { Self { min_query_len: 2, max_results: 5 } }
}

impl MapConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .context("[config] Failed to parse map configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read configuration file: {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.radius.zoom.validate()?;
        ensure!(self.radius.selected.is_finite() && self.radius.selected > 0.0,
            "[config] Selected radius must be positive, got {}", self.radius.selected);
        ensure!(self.stroke.width >= 0.0 && self.stroke.selected_width >= 0.0,
            "[config] Stroke widths must be non-negative");
        ensure!(self.fly_to.speed > 0.0, "[config] Fly-to speed must be positive, got {}", self.fly_to.speed);
        ensure!(self.search.max_results > 0, "[config] Search must return at least one result");
        ensure!(!self.layer_id.is_empty() && !self.source_id.is_empty(), "[config] Layer and source ids must be set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::MapConfig;
    use crate::view::Rgb;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(MapConfig::from_json_str("{}").unwrap(), MapConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = MapConfig::from_json_str(r##"{
            "search": {"max_results": 8},
            "stroke": {"color": "#000000"},
            "report_url": null
        }"##).unwrap();

        assert_eq!(config.search.max_results, 8);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.stroke.color, Rgb::from_hex(0x000000));
        assert_eq!(config.stroke.selected_width, 3.0);
        assert_eq!(config.report_url, None);
    }

    #[test]
    fn host_page_settings_are_exported() {
        let exported = serde_json::to_value(MapConfig::default()).unwrap();
        assert_eq!(exported["data_url"], "./data/city_and_archetype.csv");
        assert_eq!(exported["center"], serde_json::json!([-98.5795, 39.8283]));
        assert_eq!(exported["layer_id"], "cities-points");
    }

    #[test]
    fn partial_zoom_curve_keeps_default_stops() {
        let config = MapConfig::from_json_str(r#"{"radius": {"zoom": {"base": 1.5}}}"#).unwrap();
        assert_eq!(config.radius.zoom.base, 1.5);
        assert_eq!(config.radius.zoom.stops, vec![[3.0, 4.5], [6.0, 7.5], [10.0, 10.5]]);
        assert_eq!(config.radius.zoom.evaluate(3.0), 4.5);
    }

    #[test]
    fn rejects_decreasing_zoom_stops() {
        let err = MapConfig::from_json_str(r#"{"radius": {"zoom": {"stops": [[6, 7.5], [3, 4.5]]}}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_bad_color() {
        assert!(MapConfig::from_json_str(r#"{"stroke": {"color": "white"}}"#).is_err());
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"fly_to": {"zoom": 9}}"#).unwrap();
        let config = MapConfig::from_path(file.path()).unwrap();
        assert_eq!(config.fly_to.zoom, 9.0);
        assert_eq!(config.fly_to.speed, 0.8);
    }
}
