//! Paint rules for the city point layer.
//!
//! The same rules are available two ways: evaluated per feature (`style_for`)
//! and exported as map-library paint expressions (`PaintRules::to_mapbox_paint`)
//! for the rendering surface to apply.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::MapConfig;
use crate::state::SelectionState;
use crate::types::{Archetype, CityFeature, FeatureId};

use super::Rgb;

/// Piecewise function of zoom level.
///
/// Stops are `[zoom, value]` pairs with strictly increasing zoom. Outside the
/// stop range the nearest end value is used. Between stops the value is
/// interpolated with `base`: `1.0` is linear, larger values ease in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomStops {
    pub base: f64,
    pub stops: Vec<[f64; 2]>,
}

impl Default for ZoomStops {
    /// Unselected point radius: 4.5 at zoom 3, 7.5 at zoom 6, 10.5 at zoom 10.
    fn default() -> Self { Self::linear(vec![[3.0, 4.5], [6.0, 7.5], [10.0, 10.5]]) }
}

impl ZoomStops {
    pub fn linear(stops: Vec<[f64; 2]>) -> Self { Self { base: 1.0, stops } }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.stops.is_empty(), "[view::style] Zoom curve needs at least one stop");
        ensure!(self.base.is_finite() && self.base > 0.0, "[view::style] Zoom curve base must be positive, got {}", self.base);
        ensure!(self.stops.iter().flatten().all(|v| v.is_finite()), "[view::style] Zoom stops must be finite");
        ensure!(self.stops.windows(2).all(|w| w[0][0] < w[1][0]), "[view::style] Zoom stops must be strictly increasing");
        Ok(())
    }

    /// Value at `zoom`.
    pub fn evaluate(&self, zoom: f64) -> f64 {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else { return 0.0 };
        if zoom <= first[0] { return first[1] }
        if zoom >= last[0] { return last[1] }

        for w in self.stops.windows(2) {
            let ([z0, v0], [z1, v1]) = (w[0], w[1]);
            if zoom <= z1 {
                let t = interpolation_factor(self.base, z0, z1, zoom);
                return v0 + (v1 - v0) * t;
            }
        }
        last[1]
    }

    /// `["interpolate", <curve>, ["zoom"], z0, out(v0), ...]`
    pub fn to_expression(&self, output: impl Fn(f64) -> Value) -> Value {
        let curve = if self.base == 1.0 { json!(["linear"]) } else { json!(["exponential", self.base]) };
        let mut expr = vec![json!("interpolate"), curve, json!(["zoom"])];
        for &[zoom, value] in &self.stops {
            expr.push(json!(zoom));
            expr.push(output(value));
        }
        Value::Array(expr)
    }
}

fn interpolation_factor(base: f64, lower: f64, upper: f64, x: f64) -> f64 {
    let span = upper - lower;
    let progress = x - lower;
    if span == 0.0 { return 0.0 }
    if base == 1.0 { return progress / span }
    (base.powf(progress) - 1.0) / (base.powf(span) - 1.0)
}

/// Evaluated style of one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointStyle {
    pub radius: f64,
    pub color: Rgb,
    pub stroke_width: f64,
}

/// Paint rules for the current selection.
#[derive(Debug, Clone, Copy)]
pub struct PaintRules<'a> {
    config: &'a MapConfig,
    selected_id: Option<FeatureId>,
}

impl<'a> PaintRules<'a> {
    pub fn new(config: &'a MapConfig, state: &SelectionState) -> Self {
        Self { config, selected_id: state.selected_id }
    }

    #[inline]
    pub fn is_selected(&self, feature: &CityFeature) -> bool {
        self.selected_id == Some(feature.id)
    }

    /// The selected point ignores zoom entirely.
    pub fn radius(&self, feature: &CityFeature, zoom: f64) -> f64 {
        if self.is_selected(feature) {
            self.config.radius.selected
        } else {
            self.config.radius.zoom.evaluate(zoom)
        }
    }

    pub fn color(&self, feature: &CityFeature) -> Rgb {
        color_for(feature.archetype(), self.is_selected(feature))
    }

    pub fn stroke_width(&self, feature: &CityFeature) -> f64 {
        if self.is_selected(feature) { self.config.stroke.selected_width } else { self.config.stroke.width }
    }

    pub fn style_for(&self, feature: &CityFeature, zoom: f64) -> PointStyle {
        PointStyle {
            radius: self.radius(feature, zoom),
            color: self.color(feature),
            stroke_width: self.stroke_width(feature),
        }
    }

    /// Circle-layer paint properties encoding these rules.
    pub fn to_mapbox_paint(&self) -> Value {
        let is_selected = json!(["==", ["id"], self.selected_id]);
        let selected_radius = self.config.radius.selected;

        // Zoom interpolation must be the outermost expression.
        let radius = self.config.radius.zoom.to_expression(|value| {
            json!(["case", is_selected.clone(), selected_radius, value])
        });

        json!({
            "circle-radius": radius,
            "circle-color": ["case", is_selected, color_match(true), color_match(false)],
            "circle-opacity": 1,
            "circle-stroke-width": [
                "case", is_selected,
                self.config.stroke.selected_width,
                self.config.stroke.width,
            ],
            "circle-stroke-color": self.config.stroke.color.to_string(),
            "circle-stroke-opacity": self.config.stroke.opacity,
        })
    }
}

/// `["match", archetype, key, color, ..., fallback]`
fn color_match(is_selected: bool) -> Value {
    let mut expr = vec![json!("match"), json!(["to-string", ["get", "archetype"]])];
    for archetype in Archetype::ALL {
        expr.push(json!(archetype.to_str()));
        expr.push(json!(archetype.colors().pick(is_selected).to_string()));
    }
    expr.push(json!(Archetype::Unknown.colors().pick(is_selected).to_string()));
    Value::Array(expr)
}

/// Pure color rule: depends only on archetype and selection.
#[inline]
pub fn color_for(archetype: Archetype, is_selected: bool) -> Rgb {
    archetype.colors().pick(is_selected)
}

/// Evaluate every paint rule for one feature.
pub fn style_for(feature: &CityFeature, state: &SelectionState, config: &MapConfig, zoom: f64) -> PointStyle {
    PaintRules::new(config, state).style_for(feature, zoom)
}

/// Whether `feature` passes the active archetype filter.
/// Selection plays no part: a filtered-out city stays selected but hidden.
#[inline]
pub fn is_visible(feature: &CityFeature, state: &SelectionState) -> bool {
    state.active_filter.is_none_or(|archetype| feature.archetype() == archetype)
}

/// Layer filter expression, or null to show everything.
pub fn filter_expression(filter: Option<Archetype>) -> Value {
    match filter {
        Some(archetype) => json!(["==", ["get", "archetype"], archetype.to_str()]),
        None => Value::Null,
    }
}
