//! Gridlift — copy a local multi-sheet workbook into a Google spreadsheet.
//!
//! The crate reads every sheet of a local workbook into an immutable
//! tabular form, then copies the sheets into the destination document
//! concurrently: one task per sheet, each creating its destination sheet
//! (with name-collision resolution), growing the grid when the data
//! exceeds the sheet's capacity, and writing all values in a single bulk
//! call.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use gridlift::remote::{HttpTransport, SheetsClient};
//! use gridlift::{source, transfer};
//!
//! # async fn run() -> gridlift::Result<()> {
//! let sheets = source::load_sheets("report.xlsx")?;
//! let token = gridlift::remote::auth::load_access_token("credentials.json")?;
//! let transport = HttpTransport::new("spreadsheet-id", token, Duration::from_secs(30))?;
//! let client = Arc::new(SheetsClient::open(transport).await?);
//!
//! let report = transfer::transfer_workbook(sheets, client).await;
//! println!("{} copied, {} failed", report.succeeded(), report.failed());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`source`] — immutable tabular view of the local workbook
//! - [`remote`] — addressing, wire types, and the shared destination client
//! - [`transfer`] — the per-sheet copy algorithm and the concurrent fan-out
//! - [`config`] — the three-attribute run configuration

// Module declarations
pub mod common;
pub mod config;
pub mod remote;
pub mod source;
pub mod transfer;

// Re-exports
pub use common::{Error, Result};
