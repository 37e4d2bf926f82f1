//! Serde models of the destination service's wire contract.
//!
//! Three logical calls cover everything this tool needs: listing the
//! existing sheets, batched structural updates (add a sheet, append rows
//! or columns), and batched value updates. The JSON shapes here mirror
//! the Google Sheets v4 REST bodies exactly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row capacity of a freshly created sheet when the service does not say.
pub const DEFAULT_ROW_CAPACITY: u32 = 1000;

/// Column capacity of a freshly created sheet when the service does not say.
pub const DEFAULT_COLUMN_CAPACITY: u32 = 26;

/// One structural operation of a batch update.
///
/// Externally tagged so the variants render as `{"addSheet": {..}}` and
/// `{"appendDimension": {..}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StructuralRequest {
    AddSheet(AddSheetRequest),
    AppendDimension(AppendDimensionRequest),
}

#[derive(Debug, Clone, Serialize)]
pub struct AddSheetRequest {
    pub properties: NewSheetProperties,
}

/// The only property a new sheet is created with: its title.
#[derive(Debug, Clone, Serialize)]
pub struct NewSheetProperties {
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendDimensionRequest {
    pub sheet_id: i64,
    pub dimension: Dimension,
    pub length: u32,
}

/// Grid axis of an append request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    #[serde(rename = "ROWS")]
    Rows,
    #[serde(rename = "COLUMNS")]
    Columns,
}

/// Body of a structural batch update.
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateBody {
    pub requests: Vec<StructuralRequest>,
}

/// Reply to a structural batch update, one entry per request.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub replies: Vec<StructuralReply>,
}

/// One reply slot; only `addSheet` replies carry a payload we read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralReply {
    pub add_sheet: Option<AddSheetReply>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddSheetReply {
    pub properties: SheetProperties,
}

/// Descriptor of a destination sheet as the service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: i64,
    pub title: String,
    #[serde(default)]
    pub grid_properties: GridProperties,
}

/// Grid capacity of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    #[serde(default = "default_row_capacity")]
    pub row_count: u32,
    #[serde(default = "default_column_capacity")]
    pub column_count: u32,
}

impl Default for GridProperties {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_CAPACITY,
            column_count: DEFAULT_COLUMN_CAPACITY,
        }
    }
}

fn default_row_capacity() -> u32 {
    DEFAULT_ROW_CAPACITY
}

fn default_column_capacity() -> u32 {
    DEFAULT_COLUMN_CAPACITY
}

/// Reply to the sheet-inventory query (`fields=sheets.properties`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpreadsheetInfo {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetEntry {
    pub properties: SheetProperties,
}

/// Body of a value batch update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchValuesBody {
    pub value_input_option: ValueInputOption,
    pub data: Vec<ValueRange>,
}

/// How the service interprets incoming values; `Raw` skips formula
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueInputOption {
    #[serde(rename = "RAW")]
    Raw,
}

/// A range string plus the row-major matrix that fills it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: String,
    pub major_dimension: MajorDimension,
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MajorDimension {
    #[serde(rename = "ROWS")]
    Rows,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_sheet_request_renders_the_wire_shape() {
        let request = StructuralRequest::AddSheet(AddSheetRequest {
            properties: NewSheetProperties {
                title: "Jan".to_string(),
            },
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"addSheet": {"properties": {"title": "Jan"}}})
        );
    }

    #[test]
    fn test_append_dimension_request_renders_the_wire_shape() {
        let request = StructuralRequest::AppendDimension(AppendDimensionRequest {
            sheet_id: 7,
            dimension: Dimension::Columns,
            length: 4,
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"appendDimension": {"sheetId": 7, "dimension": "COLUMNS", "length": 4}})
        );
    }

    #[test]
    fn test_values_body_renders_raw_input_and_row_major_values() {
        let body = BatchValuesBody {
            value_input_option: ValueInputOption::Raw,
            data: vec![ValueRange {
                range: "Jan!A1:B2".to_string(),
                major_dimension: MajorDimension::Rows,
                values: vec![vec![json!(1.0), json!(2.0)], vec![json!(3.0), json!(4.0)]],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "valueInputOption": "RAW",
                "data": [{
                    "range": "Jan!A1:B2",
                    "majorDimension": "ROWS",
                    "values": [[1.0, 2.0], [3.0, 4.0]],
                }],
            })
        );
    }

    #[test]
    fn test_sheet_properties_fall_back_to_default_grid() {
        let properties: SheetProperties =
            serde_json::from_value(json!({"sheetId": 3, "title": "Sheet1"})).unwrap();
        assert_eq!(properties.grid_properties.row_count, 1000);
        assert_eq!(properties.grid_properties.column_count, 26);

        let sized: SheetProperties = serde_json::from_value(json!({
            "sheetId": 4,
            "title": "Big",
            "gridProperties": {"rowCount": 5000, "columnCount": 40},
        }))
        .unwrap();
        assert_eq!(sized.grid_properties.row_count, 5000);
        assert_eq!(sized.grid_properties.column_count, 40);
    }
}
