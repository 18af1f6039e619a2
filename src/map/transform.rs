//! Rows -> city features.

use geo::Point;
use serde_json::Value;

use crate::io::Row;
use crate::types::{Archetype, CityAttributes, CityFeature};

use super::CityCollection;

// Column aliases seen across data variants, in priority order.
const NAME: &[&str] = &["clean_name", "name", "NAME_CITY", "name.x"];
const STATE: &[&str] = &["state", "STATE", "state.x"];
const ARCHETYPE: &[&str] = &["type", "archetype"];
const COUNTY: &[&str] = &["name_county", "county", "NAME_COUNTY"];
const LONGITUDE: &[&str] = &["longitude", "lon", "lng"];
const LATITUDE: &[&str] = &["latitude", "lat"];

/// Input rows that did not become features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Indices into the input rows lacking a finite longitude/latitude pair.
    pub dropped: Vec<usize>,
}

impl TransformReport {
    #[inline] pub fn is_clean(&self) -> bool { self.dropped.is_empty() }
}

/// Convert rows into a collection, silently dropping rows without valid coordinates.
pub fn transform(rows: &[Row]) -> CityCollection {
    transform_with_report(rows).0
}

/// Convert rows into a collection and report which rows were dropped.
///
/// Features keep input order and are numbered `0..n` over the surviving rows.
/// Rows are never merged or reordered, even when two share a name or location.
pub fn transform_with_report(rows: &[Row]) -> (CityCollection, TransformReport) {
    let mut report = TransformReport::default();
    let mut features = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let Some(coordinates) = coordinates(row) else {
            report.dropped.push(idx);
            continue;
        };
        features.push(CityFeature {
            id: 0, // assigned by CityCollection::new
            coordinates,
            attributes: attributes(row),
        });
    }

    if !report.is_clean() {
        tracing::debug!(dropped = report.dropped.len(), kept = features.len(), "[map::transform] rows without valid coordinates");
    }

    (CityCollection::new(features), report)
}

fn coordinates(row: &Row) -> Option<Point<f64>> {
    let lon = first_number(row, LONGITUDE)?;
    let lat = first_number(row, LATITUDE)?;
    Some(Point::new(lon, lat))
}

fn attributes(row: &Row) -> CityAttributes {
    let defaults = CityAttributes::default();
    CityAttributes {
        name: first_text(row, NAME).unwrap_or(defaults.name),
        state: first_text(row, STATE).unwrap_or(defaults.state),
        archetype: first_text(row, ARCHETYPE)
            .map(|value| Archetype::parse(&value))
            .unwrap_or(defaults.archetype),
        type_name: first_text(row, &["type_name"]),
        county: first_text(row, COUNTY),
        population: number(row, "population"),
        median_income: number(row, "median_income"),
        median_home_value: number(row, "median_home_value"),
        median_age: number(row, "median_age"),
        vacancy_rate: number(row, "vacancy_rate"),
        climate_val: number(row, "climate_val"),
        climate_flag: scalar(row, "climate_flag"),
        growing_val: number(row, "growing_val"),
        growing_flag: scalar(row, "growing_flag"),
        type_ind: scalar(row, "type_ind"),
    }
}

/// Non-empty text of the first alias present; numbers are rendered as text.
fn first_text(row: &Row, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match row.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn first_number(row: &Row, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| number(row, key))
}

/// Finite number from a numeric cell or a numeric-looking string.
fn number(row: &Row, key: &str) -> Option<f64> {
    let value = match row.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

fn scalar(row: &Row, key: &str) -> Option<Value> {
    row.get(key).filter(|value| !value.is_null()).cloned()
}
