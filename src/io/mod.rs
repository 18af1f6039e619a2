//! IO module for reading city data.
//!
//! - `csv` - CSV text, bytes or files into typed rows
//!
//! Note: GeoJSON export is implemented as a method on CityCollection in
//! map/io/geojson.rs.

pub(crate) mod csv;

pub use csv::{Row, load_rows, load_rows_from_path};
