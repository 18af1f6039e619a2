//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{AnyValue, CsvReadOptions}};
use serde_json::{Map, Number, Value};

/// One parsed CSV record: header name -> scalar cell value.
pub type Row = Map<String, Value>;

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    csv_options()
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string (for WASM/browser use).
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    read_csv_bytes(csv.as_bytes())
}

/// Reads a CSV from raw bytes.
pub(crate) fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    csv_options()
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .context("[io::csv::read] Failed to read CSV from bytes")
}

/// Infer column dtypes from every record, so a late cell that does not fit
/// the early rows widens the column (to float or string) instead of failing the read.
fn csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
}

/// Convert every record of `df` into a `Row`, in frame order.
/// Column dtypes come from Polars' schema inference, so numeric-looking
/// columns arrive as JSON numbers and empty cells as `Value::Null`.
pub(crate) fn dataframe_to_rows(df: &DataFrame) -> Result<Vec<Row>> {
    let mut rows = vec![Row::new(); df.height()];

    for column in df.get_columns() {
        let name = column.name().to_string();
        let series = column.as_materialized_series();
        for (idx, row) in rows.iter_mut().enumerate() {
            let value = series.get(idx)
                .with_context(|| format!("[io::csv::read] Failed to read cell {} of column {:?}", idx, name))?;
            row.insert(name.clone(), any_value_to_json(value));
        }
    }

    Ok(rows)
}

/// Parse CSV text into rows; fails if the text is unparseable or has no records.
pub fn load_rows(csv: &str) -> Result<Vec<Row>> {
    let df = read_csv_string(csv)?;
    rows_from_frame(&df)
}

/// Parse a CSV file into rows; fails if it cannot be read or has no records.
pub fn load_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let df = read_csv(path.as_ref())?;
    rows_from_frame(&df)
}

fn rows_from_frame(df: &DataFrame) -> Result<Vec<Row>> {
    ensure!(df.height() > 0, "[io::csv::read] CSV contains no records");
    let rows = dataframe_to_rows(df)?;
    tracing::debug!(rows = rows.len(), columns = df.width(), "[io::csv::read] parsed CSV");
    Ok(rows)
}

fn any_value_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => float_to_json(v as f64),
        AnyValue::Float64(v) => float_to_json(v),
        other => Value::String(other.to_string()),
    }
}

/// NaN and infinities have no JSON form; treat them as missing.
fn float_to_json(v: f64) -> Value {
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}
