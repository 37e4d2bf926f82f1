//! Workbook adapter over the calamine reader.
//!
//! Loads every sheet of a local workbook into [`TabularSheet`]s. The first
//! row of each sheet is consumed as the column-name row; only the remaining
//! rows form the value matrix that gets copied to the destination.

use std::path::Path;

use calamine::{Data, Reader as _, open_workbook_auto};
use chrono::NaiveDateTime;

use super::types::{Scalar, TabularSheet};
use crate::common::{Error, Result};

/// Load all sheets of the workbook at `path`, in workbook order.
pub fn load_sheets<P: AsRef<Path>>(path: P) -> Result<Vec<TabularSheet>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::Source(format!(
            "path to the source workbook does not exist ({})",
            path.display()
        )));
    }

    let mut workbook = open_workbook_auto(path).map_err(|error| {
        Error::Source(format!("failed to open {}: {error}", path.display()))
    })?;

    let names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name).map_err(|error| {
            Error::Source(format!("failed to read sheet '{name}': {error}"))
        })?;
        sheets.push(sheet_from_rows(name, range.rows()));
    }

    Ok(sheets)
}

/// Build a sheet from an iterator of uniform-width cell rows.
fn sheet_from_rows<'a, I>(name: String, mut rows: I) -> TabularSheet
where
    I: Iterator<Item = &'a [Data]>,
{
    let columns = rows
        .next()
        .map(|header| header.iter().map(column_title).collect())
        .unwrap_or_default();
    let matrix = rows
        .map(|row| row.iter().map(normalize).collect())
        .collect();
    TabularSheet::new(name, columns, matrix)
}

fn column_title(cell: &Data) -> String {
    match normalize(cell) {
        Scalar::Empty => String::new(),
        Scalar::Bool(value) => value.to_string(),
        Scalar::Number(value) => value.to_string(),
        Scalar::Text(value) => value,
    }
}

/// Reduce a calamine cell to a normalized scalar.
///
/// Missing values and cell errors become [`Scalar::Empty`] (written as an
/// empty string), datetimes their canonical `YYYY-MM-DD HH:MM:SS` form.
fn normalize(cell: &Data) -> Scalar {
    match cell {
        Data::Empty | Data::Error(_) => Scalar::Empty,
        Data::Bool(value) => Scalar::Bool(*value),
        Data::Int(value) => Scalar::Number(*value as f64),
        Data::Float(value) => Scalar::Number(*value),
        Data::String(value) => Scalar::Text(value.clone()),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => Scalar::Text(canonical_datetime(&datetime)),
            // Out-of-range serial number, keep the raw value
            None => Scalar::Number(value.as_f64()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => Scalar::Text(value.clone()),
    }
}

fn canonical_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}
