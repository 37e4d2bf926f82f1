//! Common types for the tabular source.

use serde_json::Value;

/// A single normalized cell value.
///
/// The workbook adapter reduces every cell to one of these four shapes
/// before the transfer layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Empty cell, written to the destination as an empty string
    Empty,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value (including stringified datetimes)
    Text(String),
}

impl Scalar {
    /// Render the scalar as the JSON value sent in a bulk write.
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Empty => Value::String(String::new()),
            Scalar::Bool(value) => Value::Bool(*value),
            Scalar::Number(value) => match serde_json::Number::from_f64(*value) {
                Some(number) => Value::Number(number),
                // Non-finite numbers have no JSON form
                None => Value::String(value.to_string()),
            },
            Scalar::Text(value) => Value::String(value.clone()),
        }
    }
}

/// One named sheet of the source workbook.
///
/// Immutable after construction; every row holds exactly
/// `column_count()` values.
#[derive(Debug, Clone)]
pub struct TabularSheet {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl TabularSheet {
    /// Build a sheet from a header row and a value matrix.
    ///
    /// Rows are padded with [`Scalar::Empty`] or truncated so that every
    /// row matches the column count.
    pub fn new(name: impl Into<String>, columns: Vec<String>, mut rows: Vec<Vec<Scalar>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, Scalar::Empty);
        }
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Sheet name, unique within the source workbook.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered column names taken from the sheet's header row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows (the header row is not part of the matrix).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The row-major value matrix.
    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    /// True when there is nothing to write (no rows or no columns).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Render the matrix as the row-major JSON payload of a bulk write.
    pub fn to_value_matrix(&self) -> Vec<Vec<Value>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Scalar::to_json).collect())
            .collect()
    }
}
