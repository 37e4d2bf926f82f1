//! Stateful handle to one destination spreadsheet.
//!
//! One `SheetsClient` is shared by every transfer task. The only shared
//! mutable state is the sheet registry, and the registry lock is held
//! across the whole read-resolve-request-insert sequence of
//! [`SheetsClient::create_sheet`] — two tasks racing on the same proposed
//! name must never both observe it as free.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::addressing::Range;
use super::api::{
    AddSheetRequest, AppendDimensionRequest, Dimension, MajorDimension, NewSheetProperties,
    SheetProperties, StructuralRequest, ValueRange,
};
use super::transport::SheetsTransport;
use crate::common::{Error, Result};

/// Client for one destination spreadsheet.
pub struct SheetsClient<T> {
    transport: T,
    registry: Mutex<HashMap<String, SheetProperties>>,
}

impl<T: SheetsTransport> SheetsClient<T> {
    /// Connect to the destination and load its existing sheet inventory
    /// into the registry.
    pub async fn open(transport: T) -> Result<Self> {
        let existing = transport.list_sheets().await?;
        let registry = existing
            .into_iter()
            .map(|properties| (properties.title.clone(), properties))
            .collect();
        Ok(Self {
            transport,
            registry: Mutex::new(registry),
        })
    }

    /// Number of sheets currently known to exist in the destination.
    pub async fn sheet_count(&self) -> usize {
        self.registry.lock().await.len()
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a new sheet, deriving a unique title from `proposed` by
    /// appending `_1`, `_2`, ... while the title is already taken.
    ///
    /// The registry stays untouched when the creation request fails.
    pub async fn create_sheet(&self, proposed: &str) -> Result<SheetProperties> {
        // Collision resolution reads the registry and the insert below
        // writes it; the lock spans the remote call so no other task can
        // resolve to the same free title in between.
        let mut registry = self.registry.lock().await;

        let mut title = proposed.to_string();
        let mut suffix = 1u32;
        while registry.contains_key(&title) {
            title = format!("{proposed}_{suffix}");
            suffix += 1;
        }

        let replies = self
            .transport
            .batch_update(vec![StructuralRequest::AddSheet(AddSheetRequest {
                properties: NewSheetProperties { title },
            })])
            .await?;

        let properties = replies
            .into_iter()
            .find_map(|reply| reply.add_sheet)
            .map(|reply| reply.properties)
            .ok_or_else(|| {
                Error::RemoteService("addSheet reply carried no sheet properties".to_string())
            })?;

        registry.insert(properties.title.clone(), properties.clone());
        Ok(properties)
    }

    /// Append `length` empty rows or columns to the sheet's grid.
    ///
    /// Callers only invoke this when growth is actually needed; the
    /// operation itself does not skip zero-length requests.
    pub async fn append_dimension(
        &self,
        sheet_id: i64,
        dimension: Dimension,
        length: u32,
    ) -> Result<()> {
        self.transport
            .batch_update(vec![StructuralRequest::AppendDimension(
                AppendDimensionRequest {
                    sheet_id,
                    dimension,
                    length,
                },
            )])
            .await?;
        Ok(())
    }

    /// Write a rectangular block of values in a single bulk call.
    pub async fn write_values(
        &self,
        range: &Range,
        values: Vec<Vec<serde_json::Value>>,
    ) -> Result<()> {
        self.transport
            .update_values(vec![ValueRange {
                range: range.to_string(),
                major_dimension: MajorDimension::Rows,
                values,
            }])
            .await
    }
}
